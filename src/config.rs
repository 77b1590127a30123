use std::collections::HashMap;
use std::env::{self, VarError};

use crate::errors::AppError;

pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
}

impl Config {
    /// Loads `.env` (if present) and then reads the process environment.
    /// Variables already set in the environment win over the file.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        match env::var(JWT_SECRET_VAR) {
            Ok(secret) => Self::from_secret(secret),
            Err(VarError::NotPresent) => Err(AppError::MissingSecret),
            Err(VarError::NotUnicode(_)) => Err(AppError::InvalidSecret),
        }
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, AppError> {
        let secret = vars
            .get(JWT_SECRET_VAR)
            .ok_or(AppError::MissingSecret)?
            .clone();

        Self::from_secret(secret)
    }

    fn from_secret(jwt_secret: String) -> Result<Self, AppError> {
        if jwt_secret.is_empty() {
            return Err(AppError::MissingSecret);
        }
        Ok(Config { jwt_secret })
    }
}
