use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::identity::use_cases::issue_custom_token::{
    IssueCustomTokenParams, IssueCustomTokenUseCase,
};
use business::domain::identity::use_cases::verify_token::{VerifyTokenParams, VerifyTokenUseCase};

use crate::api::auth::dto::{
    CurrentUserResponse, CustomTokenResponse, VerificationResponse, VerifyTokenRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    verify_token_use_case: Arc<dyn VerifyTokenUseCase>,
    issue_custom_token_use_case: Arc<dyn IssueCustomTokenUseCase>,
}

impl AuthApi {
    pub fn new(
        verify_token_use_case: Arc<dyn VerifyTokenUseCase>,
        issue_custom_token_use_case: Arc<dyn IssueCustomTokenUseCase>,
    ) -> Self {
        Self {
            verify_token_use_case,
            issue_custom_token_use_case,
        }
    }
}

/// Authentication API
///
/// Endpoints for verifying Firebase ID tokens and minting custom tokens.
#[OpenApi]
impl AuthApi {
    /// Verify a Firebase ID token
    ///
    /// Always answers 200; `success` tells whether the token was accepted.
    #[oai(path = "/auth/verify", method = "post", tag = "ApiTags::Auth")]
    async fn verify_token(&self, body: Json<VerifyTokenRequest>) -> VerifyTokenResponse {
        let result = self
            .verify_token_use_case
            .execute(VerifyTokenParams { token: body.0.token })
            .await;

        VerifyTokenResponse::Ok(Json(result.into()))
    }

    /// Current user
    ///
    /// Returns the identity carried by the bearer token.
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn current_user(&self, auth: FirebaseBearer) -> CurrentUserApiResponse {
        CurrentUserApiResponse::Ok(Json(CurrentUserResponse {
            uid: auth.0.uid,
            email: auth.0.email,
        }))
    }

    /// Issue a custom token
    ///
    /// Mints a custom token for the authenticated user, e.g. to sign the
    /// same account in on another device.
    #[oai(path = "/auth/custom-token", method = "post", tag = "ApiTags::Auth")]
    async fn issue_custom_token(&self, auth: FirebaseBearer) -> IssueCustomTokenResponse {
        match self
            .issue_custom_token_use_case
            .execute(IssueCustomTokenParams { uid: auth.0.uid })
            .await
        {
            Ok(token) => IssueCustomTokenResponse::Ok(Json(CustomTokenResponse {
                token: token.as_str().to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => IssueCustomTokenResponse::BadRequest(json),
                    _ => IssueCustomTokenResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum VerifyTokenResponse {
    #[oai(status = 200)]
    Ok(Json<VerificationResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CurrentUserApiResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentUserResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum IssueCustomTokenResponse {
    #[oai(status = 200)]
    Ok(Json<CustomTokenResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
