use reqwest::Client;

/// Google endpoint publishing the X.509 certificates that sign Firebase ID tokens.
pub const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

/// Shared HTTP client configuration for Google identity endpoints.
#[derive(Clone)]
pub struct FirebaseClient {
    pub client: Client,
    pub certs_url: String,
}

impl FirebaseClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            certs_url: GOOGLE_CERTS_URL.to_string(),
        }
    }

    /// Points the client at another certificate endpoint, e.g. an emulator.
    pub fn with_certs_url(mut self, certs_url: impl Into<String>) -> Self {
        self.certs_url = certs_url.into();
        self
    }
}

impl Default for FirebaseClient {
    fn default() -> Self {
        Self::new()
    }
}
