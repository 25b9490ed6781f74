//! Timed HTTP calls

use super::client::{ApiCallResult, ApiRequest, HttpClient, HttpResponse};
use crate::core::{format_elapsed_short, Logger};
use chrono::Local;
use std::time::Instant;

impl Logger {
    /// Perform `request` through `client` and log how long it took.
    ///
    /// An info line announces the call and another reports status, duration
    /// and body size. A client error is logged at ERROR and returned
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timed_logger::api::{ApiRequest, ReqwestClient};
    /// use timed_logger::{Logger, LoggerConfig};
    ///
    /// let logger = Logger::new(LoggerConfig::new("api"))?;
    /// let client = ReqwestClient::new()?;
    ///
    /// let result = logger.measure_api_call(&client, ApiRequest::get("https://example.com"))?;
    /// println!("{} in {:?}", result.status_code, result.elapsed);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn measure_api_call<C>(
        &self,
        client: &C,
        request: ApiRequest,
    ) -> Result<ApiCallResult<C::Response>, C::Error>
    where
        C: HttpClient + ?Sized,
    {
        let started = Instant::now();
        let start_time = Local::now();
        let method = request.method();
        let url = request.url();

        self.info(format!("🌐 API Call Started: {} {}", method, url));

        match client.execute(&request) {
            Ok(response) => {
                let elapsed = started.elapsed();
                let status_code = response.status_code();
                let status_icon = if status_code < 400 { "✅" } else { "❌" };

                self.info(format!(
                    "{} API Response: {} {} | Status: {} | Time: {} | Size: {} bytes",
                    status_icon,
                    method,
                    url,
                    status_code,
                    format_elapsed_short(elapsed),
                    response.content().len()
                ));

                Ok(ApiCallResult {
                    response,
                    elapsed,
                    status_code,
                    start_time,
                    end_time: Local::now(),
                })
            }
            Err(e) => {
                let elapsed = started.elapsed();
                self.error(format!(
                    "❌ API Call Failed: {} {} | Time: {} | Error: {}",
                    method,
                    url,
                    format_elapsed_short(elapsed),
                    e
                ));
                Err(e)
            }
        }
    }
}
