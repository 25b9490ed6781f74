//! HTTP collaborator abstraction and request description

use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_METHOD: &str = "GET";

/// Options handed to the HTTP client unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub json: Option<serde_json::Value>,
    pub timeout: Option<Duration>,
}

/// One request: method, URL and passthrough options.
///
/// # Example
///
/// ```
/// use timed_logger::api::ApiRequest;
/// use std::time::Duration;
///
/// let request = ApiRequest::post("https://example.com/orders")
///     .header("Authorization", "Bearer token")
///     .json(serde_json::json!({"sku": "A-1", "qty": 2}))
///     .timeout(Duration::from_secs(5));
/// assert_eq!(request.method(), "POST");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: String,
    url: String,
    options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            options: RequestOptions::default(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(DEFAULT_METHOD, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new("PUT", url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new("DELETE", url)
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.query.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.options.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.options.json = Some(value);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }
}

/// What the timing helper needs to know about a response.
pub trait HttpResponse {
    fn status_code(&self) -> u16;

    /// Response body bytes
    fn content(&self) -> &[u8];
}

/// Performs requests on behalf of [`Logger::measure_api_call`](crate::Logger::measure_api_call).
pub trait HttpClient {
    type Response: HttpResponse;
    type Error: fmt::Display;

    fn execute(&self, request: &ApiRequest) -> Result<Self::Response, Self::Error>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    type Response = C::Response;
    type Error = C::Error;

    fn execute(&self, request: &ApiRequest) -> Result<Self::Response, Self::Error> {
        (**self).execute(request)
    }
}

/// Response with its body already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    pub status: u16,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: String::new(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl HttpResponse for BufferedResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn content(&self) -> &[u8] {
        &self.body
    }
}

/// Outcome of a timed request, returned to the caller.
#[derive(Debug, Clone)]
pub struct ApiCallResult<R> {
    pub response: R,
    pub elapsed: Duration,
    pub status_code: u16,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
}

impl<R> ApiCallResult<R> {
    /// Status below 400
    pub fn is_success(&self) -> bool {
        self.status_code < 400
    }

    pub fn into_response(self) -> R {
        self.response
    }
}
