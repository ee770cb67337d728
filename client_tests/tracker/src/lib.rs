use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracker_client::{HttpClient, Request, RequestOptions, TrackerClient};
use url::Url;

pub const PROJECT_ID: &str = "some-project-id";
pub const TRACKER_TOKEN: &str = "some-token";

/// Transport double that records every call and answers with a canned body.
#[derive(Clone)]
pub struct RecordingClient {
    calls: Arc<Mutex<Vec<Request>>>,
    response: String,
}

impl RecordingClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(vec![])),
            response: response.into(),
        }
    }

    pub fn calls(&self) -> Vec<Request> {
        self.calls.lock().unwrap().clone()
    }

    pub fn most_recent(&self) -> Request {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("transport was never called")
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new("{}")
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn send(&self, url: &Url, options: &RequestOptions) -> Result<String> {
        self.calls.lock().unwrap().push(Request {
            url: url.clone(),
            options: options.clone(),
        });
        Ok(self.response.clone())
    }
}

/// Transport double that always fails with the given message.
#[derive(Clone)]
pub struct FailingClient {
    message: &'static str,
}

impl FailingClient {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[async_trait]
impl HttpClient for FailingClient {
    async fn send(&self, _url: &Url, _options: &RequestOptions) -> Result<String> {
        Err(anyhow!(self.message))
    }
}

pub fn recording_client() -> (TrackerClient<RecordingClient>, RecordingClient) {
    let transport = RecordingClient::default();
    let client = TrackerClient::new(TRACKER_TOKEN, transport.clone()).unwrap();
    (client, transport)
}

/// Every request must carry exactly the JSON content type and the token.
pub fn assert_tracker_headers(options: &RequestOptions) {
    assert_eq!(options.headers.len(), 2, "unexpected headers: {:?}", options.headers);
    assert_eq!(options.header("Content-Type"), Some("application/json"));
    assert_eq!(options.header("X-TrackerToken"), Some(TRACKER_TOKEN));
}

pub fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}
