use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use super::request::RequestOptions;

/// Minimal async HTTP client trait that can be implemented with any HTTP library.
///
/// `TrackerClient` only builds requests; performing them is delegated to this
/// trait so consumers can bring their own transport (reqwest, ureq, a browser
/// `fetch` bridge, or a test double).
///
/// # Implementing the trait
///
/// ```ignore
/// use async_trait::async_trait;
/// use tracker_client::{HttpClient, RequestOptions};
/// use url::Url;
///
/// #[derive(Clone)]
/// struct MyHttpClient;
///
/// #[async_trait]
/// impl HttpClient for MyHttpClient {
///     async fn send(&self, url: &Url, options: &RequestOptions) -> anyhow::Result<String> {
///         // Issue `options.method` to `url` with `options.headers` and
///         // `options.body`, then return the response body
///         Ok("{}".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync + Clone {
    /// Perform a request.
    ///
    /// # Arguments
    /// * `url` - The full URL, query string included
    /// * `options` - Method, headers and optional body
    ///
    /// # Returns
    /// The response body as a string. Any error is handed back to the caller
    /// of `TrackerClient` untouched.
    async fn send(&self, url: &Url, options: &RequestOptions) -> Result<String>;
}
