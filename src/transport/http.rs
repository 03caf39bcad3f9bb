use crate::config::ClientConfig;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result};
use std::time::{Duration, Instant};
use tracing::debug;

pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    site_url: String,
    site_name: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
            timeout: config.timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST one chat-completion request and return the first choice's text.
    ///
    /// The whole exchange (send + body read) is bounded by the configured
    /// timeout; on expiry the error is [`TransportError::Timeout`].
    pub async fn complete(&self, body: &ChatCompletionRequest, request_id: &str) -> Result<String> {
        let start = Instant::now();
        let exchange = async {
            let mut req = self
                .client
                .post(&self.url)
                .json(body)
                .header("HTTP-Referer", &self.site_url)
                .header("X-Title", &self.site_name)
                .header("x-request-id", request_id);

            if let Some(key) = &self.api_key {
                req = req.bearer_auth(key);
            }

            let resp = req.send().await.map_err(TransportError::Http)?;
            let status = resp.status();
            let text = resp.text().await.map_err(TransportError::Http)?;
            Ok::<_, Error>((status, text))
        };

        let (status, text) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| TransportError::Timeout(self.timeout.as_millis() as u64))??;

        debug!(
            http_status = status.as_u16(),
            model = body.model.as_str(),
            request_id,
            duration_ms = start.elapsed().as_millis() as u64,
            "completion exchange finished"
        );

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| Error::malformed(e.to_string()))?;
        parsed.first_content()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Other(String),
}
