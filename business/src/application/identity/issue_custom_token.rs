use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::model::CustomToken;
use crate::domain::identity::services::IdentityApp;
use crate::domain::identity::use_cases::issue_custom_token::{
    IssueCustomTokenParams, IssueCustomTokenUseCase,
};
use crate::domain::logger::Logger;

const MAX_UID_LENGTH: usize = 128;

pub struct IssueCustomTokenUseCaseImpl {
    pub app: Arc<dyn IdentityApp>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IssueCustomTokenUseCase for IssueCustomTokenUseCaseImpl {
    async fn execute(&self, params: IssueCustomTokenParams) -> Result<CustomToken, IdentityError> {
        if params.uid.is_empty() || params.uid.chars().count() > MAX_UID_LENGTH {
            return Err(IdentityError::InvalidUid);
        }

        self.logger
            .info(&format!("Issuing custom token for uid {}", params.uid));

        self.app.create_custom_token(&params.uid).inspect_err(|err| {
            self.logger
                .error(&format!("Custom token signing failed: {err}"));
        })
    }
}
