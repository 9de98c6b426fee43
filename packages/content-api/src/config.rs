//! API configuration.

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Request body read timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Base URL that media stream requests are redirected to
    pub stream_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000,
            stream_base_url: "https://example.com/stream".to_string(),
        }
    }
}
