/// Credential tiers handed out to local development clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anon,
    ServiceRole,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anon => "anon",
            Role::ServiceRole => "service_role",
        }
    }

    /// Name of the environment variable the key is printed under.
    pub fn env_key(&self) -> &'static str {
        match self {
            Role::Anon => "ANON_KEY",
            Role::ServiceRole => "SERVICE_ROLE_KEY",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
