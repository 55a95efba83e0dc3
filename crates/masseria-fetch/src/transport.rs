//! Transports that deliver a [`RequestBuilder`] and buffer the reply.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::{FetchError, RequestBuilder, Response};

/// Sends a prepared request.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// Transport backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let mut outbound = self.client.request(method, request.url.as_str());
        for (key, value) in &request.headers {
            outbound = outbound.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            outbound = outbound.body(body);
        }

        let reply = outbound.send().await?;
        let status = reply.status().as_u16();
        let headers: HashMap<String, String> = reply
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = reply.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "received reply");
        Ok(Response::new(status, headers, body))
    }
}
