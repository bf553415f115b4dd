//! Transport logging wrapper
//!
//! Observes every exchange that passes through it and emits one `tracing`
//! event per request. Requests and responses are forwarded untouched.

use crate::{
    error::ClientError,
    transport::{HttpRequest, HttpResponse, HttpTransport},
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// [`HttpTransport`] decorator that logs each request/response exchange
pub struct LoggingTransport {
    inner: Arc<dyn HttpTransport>,
}

impl LoggingTransport {
    pub fn new(inner: Arc<dyn HttpTransport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpTransport for LoggingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let request_id = Uuid::new_v4();
        let method = request.method.clone();
        // Headers are not logged, they carry the bearer token
        let url = request.url.clone();
        let start = Instant::now();

        let result = self.inner.execute(request).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::info!(
                %request_id,
                transport = self.inner.name(),
                %method,
                %url,
                status = response.status.as_u16(),
                elapsed_ms,
                body_bytes = response.body.len(),
                "HTTP exchange"
            ),
            Err(e) => tracing::warn!(
                %request_id,
                transport = self.inner.name(),
                %method,
                %url,
                elapsed_ms,
                error = %e,
                "HTTP exchange failed"
            ),
        }

        result
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
