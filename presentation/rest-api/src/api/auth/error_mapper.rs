use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::identity::errors::IdentityError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for IdentityError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            IdentityError::TokenInvalid(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            IdentityError::InvalidUid => (StatusCode::BAD_REQUEST, "ValidationError"),
            IdentityError::ConfigMissing(_)
            | IdentityError::PrivateKeyEmpty
            | IdentityError::InitializationFailed(_)
            | IdentityError::TokenSigningFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
