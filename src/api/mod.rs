//! Timed HTTP calls
//!
//! [`Logger::measure_api_call`](crate::Logger::measure_api_call) works with
//! any [`HttpClient`]; [`ReqwestClient`] is the stock implementation.

pub mod client;
mod measure;

#[cfg(feature = "http")]
pub mod reqwest_client;

pub use client::{
    ApiCallResult, ApiRequest, BufferedResponse, HttpClient, HttpResponse, RequestOptions,
    DEFAULT_METHOD,
};

#[cfg(feature = "http")]
pub use reqwest_client::{HttpError, ReqwestClient};
