//! HTTP agent: the transport wrapper every domain client sends through.
//!
//! Responsibilities:
//! - Add the `kbn-xsrf` header and apply the active authentication handler.
//! - Turn any status >= 300 into an [`HttpError`] carrying the raw body.
//! - Decode JSON bodies, classifying decode failures as invalid responses.
//!
//! Does NOT handle:
//! - Retries. Every failure is returned to the caller as is.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AuthenticationHandler;
use crate::error::{ClientError, HttpError, Result};

/// Header Kibana requires on every API call.
pub const XSRF_HEADER: &str = "kbn-xsrf";

#[derive(Debug, Clone)]
pub struct HttpAgent {
    http: Client,
    auth: AuthenticationHandler,
}

impl HttpAgent {
    pub fn new(http: Client, auth: AuthenticationHandler) -> Self {
        Self { http, auth }
    }

    /// The raw transport, without authentication.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn auth(&self) -> &AuthenticationHandler {
        &self.auth
    }

    pub(crate) fn set_auth(&mut self, auth: AuthenticationHandler) {
        self.auth = auth;
    }

    /// Start a request to `url` with the Kibana headers set.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(XSRF_HEADER, "true")
    }

    /// Authenticate and send `builder`, failing on any status >= 300.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = self.auth.initialize(&self.http, builder).await?.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        debug!(
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            "Kibana request"
        );
        ensure_success(response).await
    }

    /// Send `builder` and decode the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        read_json(response).await
    }
}

/// Map a status >= 300 to an [`HttpError`] with the body verbatim.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    if status < 300 {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(HttpError::new(status, body).into())
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response: {e}")))
}
