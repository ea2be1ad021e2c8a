use super::{cors_config, firebase_config::FirebaseConfig, server_config::ServerConfig};
use business::domain::identity::errors::IdentityError;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub firebase: FirebaseConfig,
}

impl AppConfig {
    /// # Errors
    /// Fails when a required Firebase variable is missing
    pub fn from_env() -> Result<Self, IdentityError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            firebase: FirebaseConfig::from_env()?,
        })
    }
}
