//! Blocking HTTP client backed by reqwest

use super::client::{ApiRequest, BufferedResponse, HttpClient};
use reqwest::blocking::Client;
use reqwest::Method;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// [`HttpClient`] over `reqwest::blocking`.
///
/// Method names are matched case-insensitively (`"get"` sends `GET`).
/// The response body is read in full before `execute` returns, so the
/// measured time covers the whole transfer.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, HttpError> {
        Ok(Self {
            inner: Client::builder().build()?,
        })
    }

    /// Use a preconfigured client (proxies, default headers, TLS settings)
    pub fn from_client(client: Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    type Response = BufferedResponse;
    type Error = HttpError;

    fn execute(&self, request: &ApiRequest) -> Result<Self::Response, Self::Error> {
        let method = Method::from_bytes(request.method().to_ascii_uppercase().as_bytes())
            .map_err(|_| HttpError::InvalidMethod(request.method().to_string()))?;
        let options = request.options();

        let mut builder = self.inner.request(method, request.url());
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }
        if let Some(json) = &options.json {
            builder = builder.json(json);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(BufferedResponse {
            status,
            url,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_method_is_rejected_before_sending() {
        let client = ReqwestClient::new().expect("client");
        let err = client
            .execute(&ApiRequest::new("BAD METHOD", "http://127.0.0.1:9/"))
            .unwrap_err();

        assert!(matches!(err, HttpError::InvalidMethod(_)));
        assert_eq!(err.to_string(), "invalid HTTP method 'BAD METHOD'");
    }
}
