use std::sync::Arc;

use business::application::identity::initialize::InitializeIdentityUseCaseImpl;
use business::application::identity::issue_custom_token::IssueCustomTokenUseCaseImpl;
use business::application::identity::verify_token::VerifyTokenUseCaseImpl;
use business::domain::identity::errors::IdentityError;
use business::domain::identity::use_cases::initialize::{
    InitializeIdentityParams, InitializeIdentityUseCase,
};
use business::domain::identity::use_cases::verify_token::VerifyTokenUseCase;
use firebase::{FirebaseClient, FirebasePlatform};
use logger::TracingLogger;

use crate::config::firebase_config::FirebaseConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub verify_token_use_case: Arc<dyn VerifyTokenUseCase>,
}

impl DependencyContainer {
    /// Initializes the identity platform once and hands the resulting app
    /// to every consumer.
    pub fn new(firebase_config: &FirebaseConfig) -> Result<Self, IdentityError> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let platform = Arc::new(FirebasePlatform::new(FirebaseClient::new()));

        let initialize_use_case = InitializeIdentityUseCaseImpl {
            platform,
            logger: logger.clone(),
        };
        let app = initialize_use_case.execute(InitializeIdentityParams {
            config: firebase_config.credentials.clone(),
        })?;

        // Identity use cases
        let verify_token_use_case: Arc<dyn VerifyTokenUseCase> =
            Arc::new(VerifyTokenUseCaseImpl {
                app: app.clone(),
                logger: logger.clone(),
            });
        let issue_custom_token_use_case = Arc::new(IssueCustomTokenUseCaseImpl {
            app: app.clone(),
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(app.project_id().to_string());
        let auth_api = crate::api::auth::routes::AuthApi::new(
            verify_token_use_case.clone(),
            issue_custom_token_use_case,
        );

        Ok(Self {
            health_api,
            auth_api,
            verify_token_use_case,
        })
    }
}
