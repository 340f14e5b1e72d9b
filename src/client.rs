use reqwest::{Client as HttpClient, Method, StatusCode};

use crate::error::{Error, Result};

/// Authenticated GitHub API client. `auth` is an opaque pre-computed
/// Basic credential; the client does not know how it was derived.
pub struct Client {
    http: HttpClient,
    base: String,
    auth: String,
}

impl Client {
    pub fn new(base: impl Into<String>, auth: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base: base.into(),
            auth: auth.into(),
        }
    }

    /// Issues one request and buffers the full response body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = format!("{}{}", self.base, path);
        let mut req = self
            .http
            .request(method, url)
            .header("Authorization", format!("Basic {}", self.auth));

        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        Ok((status, bytes.to_vec()))
    }

    /// Single chokepoint for all operations: any status outside 200..=299
    /// becomes an API error carrying the raw response body as its message.
    /// Never retries, never parses the body.
    pub async fn require_success(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<()> {
        let (status, body) = self.request(method, path, body).await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(())
    }
}
