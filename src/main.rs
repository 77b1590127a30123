use supabase_keygen::{auth, config::Config, render_keys, roles::Role};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // stdout carries the keys only, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supabase_keygen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let anon = issue_for(Role::Anon, &config.jwt_secret)?;
    let service_role = issue_for(Role::ServiceRole, &config.jwt_secret)?;

    print!("{}", render_keys(&anon, &service_role));
    Ok(())
}

fn issue_for(role: Role, secret: &str) -> anyhow::Result<String> {
    tracing::info!(%role, key = role.env_key(), "issuing key");
    let token = auth::issue(role.as_str(), secret)?;
    Ok(token)
}
