use std::sync::Arc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::model::{Credential, PRIVATE_KEY_VAR};
use crate::domain::identity::private_key::{NormalizedPrivateKey, PEM_FOOTER, PEM_HEADER};
use crate::domain::identity::services::{IdentityApp, IdentityPlatform};
use crate::domain::identity::use_cases::initialize::{
    InitializeIdentityParams, InitializeIdentityUseCase,
};
use crate::domain::logger::Logger;

const DECODER_PATTERNS: [&str; 2] = ["DECODER", "unsupported"];

pub struct InitializeIdentityUseCaseImpl {
    pub platform: Arc<dyn IdentityPlatform>,
    pub logger: Arc<dyn Logger>,
}

impl InitializeIdentityUseCaseImpl {
    fn log_key_diagnostics(&self, key: &NormalizedPrivateKey) {
        self.logger.error(&format!(
            "Private key diagnostics: length={}, lines={}, has_header={}, has_footer={}",
            key.len(),
            key.line_count(),
            key.has_header(),
            key.has_footer()
        ));
    }

    fn log_format_hint(&self, message: &str) {
        if DECODER_PATTERNS.iter().any(|p| message.contains(p)) {
            self.logger.error(&format!(
                "The private key could not be decoded. Check that {} holds a PKCS#8 key \
                 between '{}' and '{}', with real newlines or '\\n' escapes",
                PRIVATE_KEY_VAR,
                PEM_HEADER,
                PEM_FOOTER
            ));
        }
    }
}

impl InitializeIdentityUseCase for InitializeIdentityUseCaseImpl {
    fn execute(
        &self,
        params: InitializeIdentityParams,
    ) -> Result<Arc<dyn IdentityApp>, IdentityError> {
        let config = params.config;
        config.validate()?;

        self.logger.info(&format!(
            "Initializing identity platform for project {}",
            config.project_id
        ));

        let private_key = NormalizedPrivateKey::normalize(&config.private_key);
        let credential = Credential {
            project_id: config.project_id,
            client_email: config.client_email,
            private_key,
        };

        if credential.private_key.is_blank() {
            self.logger.error("Private key is empty after normalization");
            return Err(IdentityError::PrivateKeyEmpty);
        }

        if !credential.private_key.has_pem_markers() {
            self.logger
                .warn("Private key is missing a BEGIN or END marker, initialization may fail");
        }

        let diagnostics_key = credential.private_key.clone();
        match self.platform.initialize(credential) {
            Ok(app) => {
                self.logger.info(&format!(
                    "Identity platform initialized for project {}",
                    app.project_id()
                ));
                Ok(app)
            }
            Err(err) => {
                let message = err.to_string();
                self.logger
                    .error(&format!("Identity platform initialization failed: {message}"));
                self.log_key_diagnostics(&diagnostics_key);
                self.log_format_hint(&message);
                Err(err)
            }
        }
    }
}
