use anyhow::{anyhow, Result};
use async_trait::async_trait;
use url::Url;

use super::http_trait::HttpClient;
use super::request::{Method, RequestOptions};

/// Async HTTP client implementation using reqwest.
///
/// Non-2xx responses are turned into errors before the body is read.
///
/// # Example
///
/// ```ignore
/// use tracker_client::{ReqwestClient, TrackerClient};
///
/// #[tokio::main]
/// async fn main() -> tracker_client::Result<()> {
///     let client = TrackerClient::new("my-token", ReqwestClient::new())?;
///     let projects = client.get_all_projects().await?;
///     println!("{projects}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new reqwest HTTP client with a 30 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(30)
    }

    /// Create a new reqwest HTTP client with a custom timeout.
    ///
    /// # Panics
    /// If the TLS backend cannot be initialised.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest HTTP client with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, url: &Url, options: &RequestOptions) -> Result<String> {
        let mut request = self.client.request(options.method.into(), url.clone());

        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("HTTP {} request failed: {}", options.method, e))?
            .error_for_status()
            .map_err(|e| anyhow!("HTTP {} request returned error status: {}", options.method, e))?
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        Ok(response)
    }
}
