use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use business::domain::identity::errors::IdentityError;
use jsonwebtoken::DecodingKey;
use reqwest::header::CACHE_CONTROL;
use tokio::sync::Mutex;

use crate::client::FirebaseClient;

const DEFAULT_TTL: Duration = Duration::from_secs(3600);

type KeySet = Arc<HashMap<String, DecodingKey>>;

struct CachedCerts {
    keys: KeySet,
    expires_at: Instant,
}

/// Google signing certificates, keyed by `kid`.
///
/// Keys are kept until the `max-age` announced by Google elapses. Only one
/// refresh runs at a time; concurrent callers wait for it and reuse its
/// result.
pub struct CertificateCache {
    client: FirebaseClient,
    cache: RwLock<Option<CachedCerts>>,
    refresh: Mutex<()>,
}

impl CertificateCache {
    pub fn new(client: FirebaseClient) -> Self {
        Self {
            client,
            cache: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn preloaded(keys: HashMap<String, DecodingKey>, ttl: Duration) -> Self {
        Self {
            client: FirebaseClient::new(),
            cache: RwLock::new(Some(CachedCerts {
                keys: Arc::new(keys),
                expires_at: Instant::now() + ttl,
            })),
            refresh: Mutex::new(()),
        }
    }

    /// Returns the key that signed a token with the given `kid`.
    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, IdentityError> {
        let keys = self.keys().await?;
        keys.get(kid)
            .cloned()
            .ok_or_else(|| IdentityError::token_invalid(format!("unknown kid {kid}")))
    }

    async fn keys(&self) -> Result<KeySet, IdentityError> {
        if let Some(keys) = self.fresh_keys()? {
            return Ok(keys);
        }

        let _guard = self.refresh.lock().await;
        // Another caller may have refreshed while we waited
        if let Some(keys) = self.fresh_keys()? {
            return Ok(keys);
        }

        let (keys, ttl) = self.fetch().await?;
        let keys = Arc::new(keys);
        tracing::debug!(count = keys.len(), ttl_secs = ttl.as_secs(), "Google certs refreshed");

        let mut cache = self
            .cache
            .write()
            .map_err(|e| IdentityError::token_invalid(format!("cert cache write failed: {e}")))?;
        *cache = Some(CachedCerts {
            keys: keys.clone(),
            expires_at: Instant::now() + ttl,
        });

        Ok(keys)
    }

    fn fresh_keys(&self) -> Result<Option<KeySet>, IdentityError> {
        let cache = self
            .cache
            .read()
            .map_err(|e| IdentityError::token_invalid(format!("cert cache read failed: {e}")))?;
        Ok(cache
            .as_ref()
            .filter(|cached| cached.expires_at > Instant::now())
            .map(|cached| cached.keys.clone()))
    }

    async fn fetch(&self) -> Result<(HashMap<String, DecodingKey>, Duration), IdentityError> {
        let response = self
            .client
            .client
            .get(&self.client.certs_url)
            .send()
            .await
            .map_err(|e| IdentityError::token_invalid(format!("certs fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(IdentityError::token_invalid(format!(
                "certs fetch failed: status {}",
                response.status()
            )));
        }

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(max_age)
            .unwrap_or(DEFAULT_TTL);

        let certs: HashMap<String, String> = response
            .json()
            .await
            .map_err(|e| IdentityError::token_invalid(format!("certs parse failed: {e}")))?;

        let mut keys = HashMap::new();
        for (kid, pem) in certs {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| IdentityError::token_invalid(format!("cert decode failed: {e}")))?;
            keys.insert(kid, key);
        }

        Ok((keys, ttl))
    }
}

/// Extracts `max-age` from a `Cache-Control` header value.
fn max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|seconds| seconds.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
