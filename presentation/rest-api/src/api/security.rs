use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;

use business::domain::identity::model::VerificationResult;
use business::domain::identity::use_cases::verify_token::{VerifyTokenParams, VerifyTokenUseCase};

/// Caller identity extracted from a verified Firebase ID token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: Option<String>,
}

/// Firebase Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    bearer_format = "JWT",
    checker = "firebase_bearer_checker"
)]
pub struct FirebaseBearer(pub AuthenticatedUser);

async fn firebase_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(verifier) = req.data::<Arc<dyn VerifyTokenUseCase>>() else {
        tracing::error!("Token verifier is not registered as request data");
        return None;
    };

    match verifier
        .execute(VerifyTokenParams {
            token: bearer.token,
        })
        .await
    {
        VerificationResult::Success { uid, email } => Some(AuthenticatedUser { uid, email }),
        VerificationResult::Failure { .. } => None,
    }
}
