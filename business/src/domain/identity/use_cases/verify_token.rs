use async_trait::async_trait;

use crate::domain::identity::model::VerificationResult;

pub struct VerifyTokenParams {
    pub token: String,
}

#[async_trait]
pub trait VerifyTokenUseCase: Send + Sync {
    /// Never fails: every error is reported as `VerificationResult::Failure`.
    async fn execute(&self, params: VerifyTokenParams) -> VerificationResult;
}
