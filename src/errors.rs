#[derive(Debug)]
pub enum AppError {
    MissingSecret,
    InvalidSecret,
    InvalidRole,
    Signing(String),
    InvalidToken(String),
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Signing(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingSecret => write!(f, "JWT secret is missing or empty"),
            AppError::InvalidSecret => write!(f, "JWT secret is not valid UTF-8"),
            AppError::InvalidRole => write!(f, "Role must be a non-empty string"),
            AppError::Signing(msg) => write!(f, "Signing failed: {}", msg),
            AppError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
