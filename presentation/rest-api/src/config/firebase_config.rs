use business::domain::identity::errors::IdentityError;
use business::domain::identity::model::RawCredentialConfig;

/// Service-account credentials for the Firebase project.
///
/// Environment variables (all required):
/// - FIREBASE_PROJECT_ID: Firebase project identifier
/// - FIREBASE_CLIENT_EMAIL: Service-account email
/// - FIREBASE_PRIVATE_KEY: PEM private key, raw, `\n`-escaped or inside
///   the service-account JSON document
pub struct FirebaseConfig {
    pub credentials: RawCredentialConfig,
}

impl FirebaseConfig {
    /// # Errors
    /// Returns `ConfigMissing` naming the first variable that is unset or empty
    pub fn from_env() -> Result<Self, IdentityError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, IdentityError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = RawCredentialConfig::from_lookup(lookup);
        for line in credentials.diagnostics() {
            tracing::info!("{line}");
        }
        credentials.validate()?;
        Ok(Self { credentials })
    }
}
