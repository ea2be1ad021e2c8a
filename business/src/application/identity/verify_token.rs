use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identity::model::VerificationResult;
use crate::domain::identity::services::IdentityApp;
use crate::domain::identity::use_cases::verify_token::{VerifyTokenParams, VerifyTokenUseCase};
use crate::domain::logger::Logger;

pub struct VerifyTokenUseCaseImpl {
    pub app: Arc<dyn IdentityApp>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyTokenUseCase for VerifyTokenUseCaseImpl {
    async fn execute(&self, params: VerifyTokenParams) -> VerificationResult {
        match self.app.verify_id_token(&params.token).await {
            Ok(decoded) => {
                self.logger
                    .debug(&format!("Token verified for uid {}", decoded.uid));
                decoded.into()
            }
            Err(err) => {
                self.logger.warn(&format!("Token verification failed: {err}"));
                VerificationResult::Failure {
                    error: err.to_string(),
                }
            }
        }
    }
}
