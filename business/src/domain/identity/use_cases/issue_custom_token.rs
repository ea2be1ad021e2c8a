use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::model::CustomToken;

pub struct IssueCustomTokenParams {
    pub uid: String,
}

#[async_trait]
pub trait IssueCustomTokenUseCase: Send + Sync {
    async fn execute(&self, params: IssueCustomTokenParams) -> Result<CustomToken, IdentityError>;
}
