use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, Validation, decode, decode_header, encode};
use serde::{Deserialize, Serialize};

use business::domain::identity::errors::IdentityError;
use business::domain::identity::model::{Credential, CustomToken, DecodedIdToken};
use business::domain::identity::services::{IdentityApp, IdentityPlatform};

use crate::certs::CertificateCache;
use crate::client::FirebaseClient;

const ID_TOKEN_ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const CUSTOM_TOKEN_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";
const CUSTOM_TOKEN_TTL_SECS: i64 = 3600;
const MAX_UID_LENGTH: usize = 128;

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    auth_time: Option<i64>,
}

#[derive(Debug, Serialize)]
struct CustomTokenClaims<'a> {
    iss: &'a str,
    sub: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
    uid: &'a str,
}

/// Builds Firebase apps from service-account credentials.
pub struct FirebasePlatform {
    client: FirebaseClient,
}

impl FirebasePlatform {
    pub fn new(client: FirebaseClient) -> Self {
        Self { client }
    }
}

impl IdentityPlatform for FirebasePlatform {
    fn initialize(&self, credential: Credential) -> Result<Arc<dyn IdentityApp>, IdentityError> {
        let certs = CertificateCache::new(self.client.clone());
        let app = FirebaseApp::new(&credential, certs)?;
        Ok(Arc::new(app))
    }
}

/// An initialized Firebase app: verifies ID tokens and signs custom tokens.
pub struct FirebaseApp {
    project_id: String,
    client_email: String,
    signing_key: EncodingKey,
    certs: CertificateCache,
}

impl FirebaseApp {
    /// Fails when the private key is not a decodable RSA PEM key.
    pub fn new(credential: &Credential, certs: CertificateCache) -> Result<Self, IdentityError> {
        let signing_key = EncodingKey::from_rsa_pem(credential.private_key.as_str().as_bytes())
            .map_err(|e| {
                IdentityError::InitializationFailed(format!("Failed to parse private key: {e}"))
            })?;

        Ok(Self {
            project_id: credential.project_id.clone(),
            client_email: credential.client_email.clone(),
            signing_key,
            certs,
        })
    }

    fn validation(&self) -> Validation {
        let expected_issuer = format!("{ID_TOKEN_ISSUER_PREFIX}{}", self.project_id);

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&expected_issuer]);
        validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
        validation.validate_exp = true;
        validation
    }
}

#[async_trait]
impl IdentityApp for FirebaseApp {
    fn project_id(&self) -> &str {
        &self.project_id
    }

    async fn verify_id_token(&self, token: &str) -> Result<DecodedIdToken, IdentityError> {
        let header = decode_header(token)
            .map_err(|e| IdentityError::token_invalid(format!("invalid token header: {e}")))?;

        if header.alg != Algorithm::RS256 {
            return Err(IdentityError::token_invalid(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| IdentityError::token_invalid("missing kid"))?;

        let decoding_key = self.certs.decoding_key(&kid).await?;

        let claims = decode::<FirebaseClaims>(token, &decoding_key, &self.validation())
            .map_err(|e| IdentityError::token_invalid(format!("validation failed: {e}")))?
            .claims;

        if claims.sub.is_empty() || claims.sub.chars().count() > MAX_UID_LENGTH {
            return Err(IdentityError::token_invalid("invalid subject"));
        }
        if claims.auth_time.is_some_and(|t| t > Utc::now().timestamp()) {
            return Err(IdentityError::token_invalid("auth_time is in the future"));
        }

        Ok(DecodedIdToken {
            uid: claims.sub,
            email: claims.email,
        })
    }

    fn create_custom_token(&self, uid: &str) -> Result<CustomToken, IdentityError> {
        let iat = Utc::now().timestamp();
        let claims = CustomTokenClaims {
            iss: &self.client_email,
            sub: &self.client_email,
            aud: CUSTOM_TOKEN_AUDIENCE,
            iat,
            exp: iat + CUSTOM_TOKEN_TTL_SECS,
            uid,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map(CustomToken::new)
            .map_err(|e| IdentityError::TokenSigningFailed(e.to_string()))
    }
}
