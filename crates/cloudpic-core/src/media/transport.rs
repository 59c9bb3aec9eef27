//! HTTP transport seam for signed form submissions.

use std::future::Future;

use super::form::SignedForm;
use crate::Result;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Posts a multipart form and hands back the raw response.
///
/// Implementations must not retry; every failure surfaces to the caller.
pub trait Transport: Send + Sync {
    fn post_form(
        &self,
        url: &str,
        form: SignedForm,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Reuse an existing client (shared connection pool, custom TLS roots).
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, form: SignedForm) -> Result<RawResponse> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form.into_multipart())
            .send()
            .await?;

        // Error payloads arrive with 4xx statuses; the body is decoded either way.
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_response_success_range() {
        let ok = RawResponse {
            status: 200,
            body: String::new(),
        };
        let bad = RawResponse {
            status: 401,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
