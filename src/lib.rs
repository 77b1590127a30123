//! Issues long-lived `anon` and `service_role` API keys for local development.

pub mod auth;
pub mod config;
pub mod errors;
pub mod roles;

use roles::Role;

/// Formats the two keys as the block printed on stdout.
pub fn render_keys(anon: &str, service_role: &str) -> String {
    format!(
        "=== CORRECTED TOKENS ===\n\
         {}={anon}\n\
         \n\
         {}={service_role}\n\
         ========================\n",
        Role::Anon.env_key(),
        Role::ServiceRole.env_key(),
    )
}
