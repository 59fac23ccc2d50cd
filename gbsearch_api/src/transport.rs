//! The outbound HTTP seam. [`Client`](crate::Client) only ever issues a single GET through it.

use std::time::Duration;

use url::Url;

use crate::TransportError;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A blocking HTTP GET.
///
/// Implementations report connection-level failures as errors and return
/// every response that arrived, whatever its status; status handling is
/// the client's job.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
///
/// No timeout is applied unless one is configured with
/// [`HttpTransport::with_timeout`].
pub struct HttpTransport {
    timeout: Option<Duration>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn build_client(&self) -> Result<reqwest::blocking::Client, TransportError> {
        reqwest::blocking::Client::builder()
            .user_agent(concat!("gbsearch/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                TransportError::RequestFailed(e.to_string())
            })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let client = self.build_client()?;
        let resp = client
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                TransportError::RequestFailed(e.to_string())
            })?;

        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            TransportError::RequestFailed(e.to_string())
        })?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
