use chrono::Utc;
use jsonwebtoken::{encode, decode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Serialize, Deserialize};
use crate::errors::AppError;

pub const ISSUER: &str = "supabase";

/// Ten years of 365 days.
pub const TOKEN_LIFETIME_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// The Claims struct represents the data encoded within our JWT.
/// Field order is the serialized key order: `role`, `iss`, `iat`, `exp`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub role: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(role: &str, issued_at: i64) -> Result<Self, AppError> {
        let exp = issued_at
            .checked_add(TOKEN_LIFETIME_SECS)
            .ok_or(AppError::Signing("token expiry out of range".into()))?;

        Ok(Claims {
            role: role.to_owned(),
            iss: ISSUER.to_owned(),
            iat: issued_at,
            exp,
        })
    }
}

/// Signs a token for `role` with the shared secret, issued now.
pub fn issue(role: &str, secret: &str) -> Result<String, AppError> {
    issue_at(role, secret, Utc::now().timestamp())
}

/// Signs a token for `role` with an explicit `iat`.
/// Identical inputs always produce the same token.
pub fn issue_at(role: &str, secret: &str, issued_at: i64) -> Result<String, AppError> {
    if secret.is_empty() {
        return Err(AppError::MissingSecret);
    }
    if role.is_empty() {
        return Err(AppError::InvalidRole);
    }

    let claims = Claims::new(role, issued_at)?;
    tracing::debug!(role, iat = claims.iat, exp = claims.exp, "signing token");

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
        .map_err(AppError::from)
}

/// Validates the given JWT token using the provided secret key.
/// Checks the HS256 signature, expiry, and that the issuer is [`ISSUER`].
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "super-secret-jwt-key-for-development-only-32-chars";
    const IAT: i64 = 1_750_000_000;

    #[test]
    fn lifetime_is_ten_years() {
        assert_eq!(TOKEN_LIFETIME_SECS, 315_360_000);
        let claims = Claims::new("anon", IAT).unwrap();
        assert_eq!(claims.exp - claims.iat, chrono::Duration::days(3650).num_seconds());
    }

    #[test]
    fn expiry_overflow_is_an_error() {
        let result = issue_at("anon", SECRET, i64::MAX - 10);
        assert!(matches!(result, Err(AppError::Signing(_))));
    }

    #[test]
    fn issue_at_is_deterministic() {
        let a = issue_at("anon", SECRET, IAT).unwrap();
        let b = issue_at("anon", SECRET, IAT).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_secrets_give_different_tokens() {
        let a = issue_at("anon", SECRET, IAT).unwrap();
        let b = issue_at("anon", "another-secret", IAT).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn token_has_three_segments() {
        let token = issue("service_role", SECRET).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn issue_then_validate() {
        let token = issue("anon", SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.role, "anon");
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn wrong_secret_fails_validation() {
        let token = issue("anon", SECRET).unwrap();
        let result = validate_token(&token, "not-the-same-secret");
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn empty_secret_is_rejected() {
        let result = issue("anon", "");
        assert!(matches!(result, Err(AppError::MissingSecret)));
    }

    #[test]
    fn empty_role_is_rejected() {
        let result = issue("", SECRET);
        assert!(matches!(result, Err(AppError::InvalidRole)));
    }

    #[test]
    fn any_role_string_is_accepted() {
        let token = issue("authenticated", SECRET).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.role, "authenticated");
    }

    #[test]
    fn garbage_token_fails_validation() {
        assert!(validate_token("invalid.token.here", SECRET).is_err());
    }
}
