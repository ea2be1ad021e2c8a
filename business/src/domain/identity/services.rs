use std::sync::Arc;

use async_trait::async_trait;

use super::errors::IdentityError;
use super::model::{Credential, CustomToken, DecodedIdToken};

/// Service port for the identity platform SDK.
///
/// Turns a credential into an initialized application handle. Called once
/// during startup.
pub trait IdentityPlatform: Send + Sync {
    fn initialize(&self, credential: Credential) -> Result<Arc<dyn IdentityApp>, IdentityError>;
}

/// An initialized identity platform application.
///
/// Shared read-only by every request for the lifetime of the process.
#[async_trait]
pub trait IdentityApp: Send + Sync {
    fn project_id(&self) -> &str;

    async fn verify_id_token(&self, token: &str) -> Result<DecodedIdToken, IdentityError>;

    fn create_custom_token(&self, uid: &str) -> Result<CustomToken, IdentityError>;
}
