//! Outbound HTTP client for the Masseria cart.
//!
//! Requests are described with a small builder and handed to a
//! [`Transport`]. [`HttpTransport`] talks to the network through `reqwest`;
//! [`mock::MockTransport`] replays canned replies.
//!
//! # Example
//!
//! ```rust,ignore
//! use masseria_fetch::{FetchClient, HttpTransport};
//!
//! let transport = HttpTransport::new(std::time::Duration::from_secs(10))?;
//! let client = FetchClient::new(transport).with_base_url("http://localhost:8080/");
//!
//! let reply: serde_json::Value = client
//!     .post("insertar_pedido.php")
//!     .json(&order)?
//!     .send()
//!     .await?
//!     .json()?;
//! ```

mod error;
pub mod mock;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// HTTP client bound to a transport.
pub struct FetchClient<T> {
    transport: T,
    base_url: Option<String>,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Resolve relative request paths against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        self.request(Method::Get, url)
    }

    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_, T> {
        ClientRequestBuilder {
            client: self,
            builder: RequestBuilder::new(method, url),
        }
    }

    /// Resolve `target` against the base URL.
    ///
    /// Absolute targets are returned unchanged. Relative targets follow
    /// RFC 3986 reference resolution, so `insertar_pedido.php` against
    /// `http://host/shop/` becomes `http://host/shop/insertar_pedido.php`.
    pub fn resolve(&self, target: &str) -> Result<String, FetchError> {
        if let Ok(absolute) = url::Url::parse(target) {
            return Ok(absolute.to_string());
        }
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| FetchError::InvalidUrl(format!("relative URL without base: {}", target)))?;
        Ok(url::Url::parse(base)?.join(target)?.to_string())
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a, T> {
    client: &'a FetchClient<T>,
    builder: RequestBuilder,
}

impl<'a, T: Transport> ClientRequestBuilder<'a, T> {
    /// Set the request body as JSON.
    pub fn json<B: serde::Serialize>(mut self, value: &B) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Resolve the URL and send the request through the client's transport.
    pub async fn send(self) -> Result<Response, FetchError> {
        let mut builder = self.builder;
        builder.url = self.client.resolve(&builder.url)?;
        tracing::debug!(method = builder.method.as_str(), url = %builder.url, "sending request");
        self.client.transport.send(builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpTransport, Method, Response, Transport};
}
