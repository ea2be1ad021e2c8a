use poem_openapi::Object;

use business::domain::identity::model::VerificationResult;

#[derive(Debug, Clone, Object)]
pub struct VerifyTokenRequest {
    /// Firebase ID token issued to the client
    pub token: String,
}

/// Uniform verification outcome; callers branch on `success`.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct VerificationResponse {
    pub success: bool,
    /// Firebase user id, present on success
    #[oai(skip_serializing_if_is_none)]
    pub uid: Option<String>,
    /// User email, when the account has one
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// Reason the token was rejected, present on failure
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

impl From<VerificationResult> for VerificationResponse {
    fn from(result: VerificationResult) -> Self {
        match result {
            VerificationResult::Success { uid, email } => Self {
                success: true,
                uid: Some(uid),
                email,
                error: None,
            },
            VerificationResult::Failure { error } => Self {
                success: false,
                uid: None,
                email: None,
                error: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CurrentUserResponse {
    pub uid: String,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CustomTokenResponse {
    /// Token to exchange with `signInWithCustomToken`
    pub token: String,
}
