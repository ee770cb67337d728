use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::constants::{
    API_PATH, CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE, STORY_LOOKUP_LIMIT, TRACKER_BASE_URL,
    TRACKER_TOKEN_HEADER,
};
use crate::error::{Error, Result};

use super::http_trait::HttpClient;
use super::request::{Headers, Method, Request, RequestOptions};
use super::structs::UpdateStoryRequest;

/// Client for the Tracker v5 REST API.
///
/// Generic over the HTTP client implementation, allowing consumers to provide
/// their own HTTP client by implementing the `HttpClient` trait.
///
/// Every operation comes in two halves: a `*_request` method that only builds
/// the `Request`, and an async method that builds it, hands it to the HTTP
/// client and decodes the response body as JSON.
#[derive(Clone)]
pub struct TrackerClient<H: HttpClient> {
    http_client: H,
    base_url: Url,
    token: String,
}

impl<H: HttpClient> TrackerClient<H> {
    /// Create a client talking to the hosted Tracker API.
    ///
    /// # Arguments
    /// * `token` - API token sent as `X-TrackerToken`
    /// * `http_client` - HTTP client implementation
    pub fn new(token: impl Into<String>, http_client: H) -> Result<Self> {
        Self::with_base_url(TRACKER_BASE_URL, token, http_client)
    }

    /// Create a client talking to another host, e.g. a proxy or a mock server.
    ///
    /// # Arguments
    /// * `base_url` - Origin (and optional path prefix) of the API, without
    ///   query or fragment
    /// * `token` - API token sent as `X-TrackerToken`
    /// * `http_client` - HTTP client implementation
    pub fn with_base_url(
        base_url: &str,
        token: impl Into<String>,
        http_client: H,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::CannotBeABase(base_url.to_string()));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::BaseUrlQuery(base_url.to_string()));
        }

        Ok(TrackerClient {
            http_client,
            base_url,
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Look up stories of a project. Only the first match is requested: a
    /// caller supplied `limit` is dropped and `limit=1` is sent instead.
    pub async fn get_story<P>(&self, project_id: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let request = self.get_story_request(project_id, params)?;
        self.dispatch(request).await
    }

    pub async fn create_story<P>(&self, project_id: &str, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        let request = self.create_story_request(project_id, params)?;
        self.dispatch(request).await
    }

    pub async fn update_story(
        &self,
        project_id: &str,
        story_id: &str,
        description: &str,
    ) -> Result<Value> {
        let request = self.update_story_request(project_id, story_id, description)?;
        self.dispatch(request).await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Value> {
        let request = self.get_project_request(project_id)?;
        self.dispatch(request).await
    }

    pub async fn get_all_projects(&self) -> Result<Value> {
        let request = self.get_all_projects_request()?;
        self.dispatch(request).await
    }

    /// `GET /services/v5/projects/{project_id}/stories?...&limit=1`
    ///
    /// `params` must serialize to a JSON object (or `null` for no filter).
    /// Each value is JSON-encoded on its own, so strings travel quoted. A
    /// caller supplied `limit` is dropped in favour of the forced one.
    pub fn get_story_request<P>(&self, project_id: &str, params: &P) -> Result<Request>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self.endpoint(&["projects", project_id, "stories"])?;
        append_story_query(&mut url, params)?;
        Ok(self.request(url, Method::Get, None))
    }

    /// `POST /services/v5/projects/{project_id}/stories` with `params` as the body.
    pub fn create_story_request<P>(&self, project_id: &str, params: &P) -> Result<Request>
    where
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(&["projects", project_id, "stories"])?;
        let body = serde_json::to_string(params)?;
        Ok(self.request(url, Method::Post, Some(body)))
    }

    /// `PUT /services/v5/projects/{project_id}/stories/{story_id}`
    pub fn update_story_request(
        &self,
        project_id: &str,
        story_id: &str,
        description: &str,
    ) -> Result<Request> {
        let url = self.endpoint(&["projects", project_id, "stories", story_id])?;
        let body = serde_json::to_string(&UpdateStoryRequest::new(description))?;
        Ok(self.request(url, Method::Put, Some(body)))
    }

    /// `GET /services/v5/projects/{project_id}`
    pub fn get_project_request(&self, project_id: &str) -> Result<Request> {
        let url = self.endpoint(&["projects", project_id])?;
        Ok(self.request(url, Method::Get, None))
    }

    /// `GET /services/v5/projects`
    pub fn get_all_projects_request(&self) -> Result<Request> {
        let url = self.endpoint(&["projects"])?;
        Ok(self.request(url, Method::Get, None))
    }

    /// Hand a built request to the HTTP client and decode the body.
    pub async fn dispatch(&self, request: Request) -> Result<Value> {
        let Request { url, options } = request;
        log::debug!("{} {}", options.method, url);

        let body = self.http_client.send(&url, &options).await?;
        log::trace!("{} {} returned {} bytes", options.method, url.path(), body.len());

        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(API_PATH)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, url: Url, method: Method, body: Option<String>) -> Request {
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE_HEADER.to_string(), JSON_CONTENT_TYPE.to_string());
        headers.insert(TRACKER_TOKEN_HEADER.to_string(), self.token.clone());

        Request {
            url,
            options: RequestOptions {
                method,
                headers,
                body,
            },
        }
    }
}

fn append_story_query<P>(url: &mut Url, params: &P) -> Result<()>
where
    P: Serialize + ?Sized,
{
    let params = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(Error::InvalidParams("expected a JSON object")),
    };

    let mut query = url.query_pairs_mut();
    for (key, value) in params.iter().filter(|(key, _)| key.as_str() != "limit") {
        query.append_pair(key, &serde_json::to_string(value)?);
    }
    query.append_pair("limit", &serde_json::to_string(&STORY_LOOKUP_LIMIT)?);
    Ok(())
}
