//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::Request;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use tokio::time;

use crate::router::RouterError;
use content_store::StoreError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Reads the whole request body with a timeout, returning the request with
/// its body buffered.
pub async fn read_request_body_with_timeout<B>(
    req: Request<B>,
    timeout_ms: u64,
) -> Result<Request<Bytes>, RouterError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let collected = time::timeout(timeout_duration, body.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(Request::from_parts(parts, collected.to_bytes()))
}

/// Returns the percent-decoded value of the `id` path parameter.
pub(crate) fn id_param(params: &MatchitParams<'_, '_>) -> Result<String, RouterError> {
    let raw = params.get("id").ok_or_else(|| {
        RouterError::InternalError("Route is missing its id parameter".to_string())
    })?;
    percent_decode_str(raw)
        .decode_utf8()
        .map(|id| id.into_owned())
        .map_err(|e| RouterError::BadRequest(format!("Invalid identifier '{}': {}", raw, e)))
}

/// Parses a request body that must be a JSON object.
///
/// Unknown keys are ignored, so a client-supplied `id` never reaches the store.
pub(crate) fn parse_json_object<T: DeserializeOwned>(body: &Bytes) -> Result<T, RouterError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;
    if !value.is_object() {
        return Err(RouterError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::MissingField { .. } => RouterError::BadRequest(e.to_string()),
        StoreError::NotFound { .. } => RouterError::NotFound(e.to_string()),
        StoreError::LockPoisoned => RouterError::InternalError(format!("Store error: {}", e)),
    }
}
