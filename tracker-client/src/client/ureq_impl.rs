use anyhow::{anyhow, Result};
use async_trait::async_trait;
use url::Url;

use super::http_trait::HttpClient;
use super::request::RequestOptions;

/// Minimal HTTP client implementation using ureq.
///
/// Blocking under the hood: the future completes on the calling thread, so it
/// suits callers that drive the client with `block_on`.
///
/// # Example
///
/// ```ignore
/// use futures::executor::block_on;
/// use tracker_client::{TrackerClient, UreqClient};
///
/// let client = TrackerClient::new("my-token", UreqClient::new())?;
/// let project = block_on(client.get_project("99"))?;
/// ```
#[derive(Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    /// Create a new ureq HTTP client with a 30 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(30)
    }

    /// Create a new ureq HTTP client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build(),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for UreqClient {
    async fn send(&self, url: &Url, options: &RequestOptions) -> Result<String> {
        let mut request = self.agent.request_url(options.method.as_str(), url);
        for (name, value) in &options.headers {
            request = request.set(name, value);
        }

        let response = match &options.body {
            Some(body) => request.send_string(body),
            None => request.call(),
        }
        .map_err(|e| anyhow!("HTTP {} request failed: {}", options.method, e))?
        .into_string()
        .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        Ok(response)
    }
}
