//! HTTP client for N-Triples documents

use super::{FetchError, FetchRequest, FetchResponse, FetchResult, DEFAULT_ACCEPT};
use crate::config::FetchConfig;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// GET `request.uri`, retrying transport errors and 5xx responses up to
    /// `retries` times
    pub async fn get(&self, request: &FetchRequest) -> FetchResult<FetchResponse> {
        let mut attempt: u32 = 0;
        loop {
            match self.get_once(request).await {
                Err(err) if err.is_retryable() && attempt < self.config.retries => {
                    attempt += 1;
                    let delay = Duration::from_millis(
                        self.config.retry_backoff_ms.saturating_mul(u64::from(attempt)),
                    );
                    warn!(uri = %request.uri, attempt, error = %err, "Retrying request in {:?}", delay);
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn get_once(&self, request: &FetchRequest) -> FetchResult<FetchResponse> {
        let transport_error = |e: reqwest::Error| FetchError::Transport {
            uri: request.uri.clone(),
            message: e.to_string(),
        };

        let mut builder = self.client.get(&request.uri).header(ACCEPT, DEFAULT_ACCEPT);
        for (key, value) in self.config.headers.iter() {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(token) = &self.config.bearer_token {
            debug!("Adding auth header");
            builder = builder.bearer_auth(token);
        }

        let resp = builder.send().await.map_err(transport_error)?;
        let status_code = resp.status().as_u16();
        info!(uri = %request.uri, status_code, "Received status code");

        let body = resp.bytes().await.map_err(transport_error)?;

        if status_code != 200 {
            return Err(FetchError::Status {
                status_code,
                uri: request.uri.clone(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(FetchResponse {
            uri: request.uri.clone(),
            status_code,
            body,
        })
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("timeout_secs", &self.config.timeout_secs)
            .field("retries", &self.config.retries)
            .finish_non_exhaustive()
    }
}
