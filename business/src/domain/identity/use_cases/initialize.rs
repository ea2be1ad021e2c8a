use std::sync::Arc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::model::RawCredentialConfig;
use crate::domain::identity::services::IdentityApp;

pub struct InitializeIdentityParams {
    pub config: RawCredentialConfig,
}

/// Runs once at startup. Any error must abort the process.
pub trait InitializeIdentityUseCase: Send + Sync {
    fn execute(
        &self,
        params: InitializeIdentityParams,
    ) -> Result<Arc<dyn IdentityApp>, IdentityError>;
}
