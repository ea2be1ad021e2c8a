/// Identity errors for the domain layer.
/// Messages follow the code-style identifiers used across the API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity.config_missing: {0}")]
    ConfigMissing(String),
    #[error("identity.private_key_empty")]
    PrivateKeyEmpty,
    #[error("identity.initialization_failed: {0}")]
    InitializationFailed(String),
    #[error("identity.token_invalid: {0}")]
    TokenInvalid(String),
    #[error("identity.invalid_uid")]
    InvalidUid,
    #[error("identity.token_signing_failed: {0}")]
    TokenSigningFailed(String),
}

impl IdentityError {
    pub fn config_missing(variable: &str) -> Self {
        IdentityError::ConfigMissing(variable.to_string())
    }
    pub fn token_invalid(detail: impl std::fmt::Display) -> Self {
        IdentityError::TokenInvalid(detail.to_string())
    }
}
