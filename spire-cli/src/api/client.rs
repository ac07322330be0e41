//! HTTP plumbing shared by all Spire API calls

use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ImportError;

use super::query::FilterQuery;

/// Client for the Spire REST API.
///
/// Holds the root URL and basic-auth credentials for the process
/// lifetime; cheap to share by reference across sequential calls.
pub struct SpireClient {
    http: reqwest::Client,
    root_url: String,
    username: String,
    password: String,
}

/// A response read to completion: status plus the verbatim body text.
/// Error bodies are kept as-is so they can be surfaced to the user.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ImportError> {
        serde_json::from_str(&self.body).map_err(|err| ImportError::Upstream {
            status: self.status,
            body: format!("unexpected response body ({err}): {}", self.body),
        })
    }
}

impl SpireClient {
    pub fn new(config: &Config) -> Result<Self, ImportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            root_url: config.root_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url(&self, path: &str, query: Option<&FilterQuery>) -> String {
        match query {
            Some(query) => format!("{}/{}?{}", self.root_url, path, query.to_query_string()),
            None => format!("{}/{}", self.root_url, path),
        }
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: Option<&FilterQuery>,
    ) -> Result<ApiResponse, ImportError> {
        let url = self.url(path, query);
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        Self::read(response).await
    }

    pub(crate) async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ImportError> {
        let url = self.url(path, None);
        debug!("PUT {url}");
        let response = self
            .http
            .put(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    pub(crate) async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ImportError> {
        let url = self.url(path, None);
        debug!("POST {url}");
        let response = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(&self.password))
            .json(body)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<ApiResponse, ImportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
