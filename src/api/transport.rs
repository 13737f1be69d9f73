//! The HTTP capability the client is built on.

use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

use async_trait::async_trait;
use bon::Builder;
use http::{Method, StatusCode};
use reqwest::Url;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[must_use]
#[derive(Clone, Builder)]
pub struct Request {
    pub method: Method,

    pub url: Url,

    /// Sent as the `Authorization: Bearer …` header.
    #[builder(into)]
    pub bearer_token: Option<String>,

    /// JSON body.
    pub body: Option<serde_json::Value>,
}

impl Debug for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("is_authorized", &self.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}

#[must_use]
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// Build the default transport.
pub fn try_new() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent("geotogether").timeout(Duration::from_secs(10)).build()
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self.request(request.method, request.url);
        if let Some(bearer_token) = &request.bearer_token {
            builder = builder.bearer_auth(bearer_token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(Response { status, body })
    }
}
