//! Swagger documentation endpoints.

use std::path::Path;

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};

use super::request_utils::MatchitParams;
use super::response::build_response;

const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Content Service API</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@4/swagger-ui.css" />
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@4/swagger-ui-bundle.js"></script>
<script>
window.onload = function() {
  SwaggerUIBundle({url: '/docs/swagger.json', dom_id: '#swagger-ui'});
};
</script>
</body>
</html>"#;

/// Reads the Swagger document served at `/docs/swagger.json`.
///
/// A missing or unreadable file is not fatal: a warning is logged and the
/// route answers 404 for the lifetime of the process.
pub fn load_swagger_spec(path: &Path) -> Option<Bytes> {
    match std::fs::read(path) {
        Ok(data) => {
            tracing::info!(path = %path.display(), bytes = data.len(), "loaded swagger spec");
            Some(Bytes::from(data))
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "unable to read swagger spec: {}", e);
            None
        }
    }
}

/// `GET /docs`: Swagger UI page pointing at `/docs/swagger.json`.
pub fn docs_page(
    _req: Request<Bytes>,
    _params: MatchitParams<'_, '_>,
    _state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    build_response(
        200,
        "text/html; charset=utf-8",
        Bytes::from_static(DOCS_PAGE.as_bytes()),
    )
}

/// `GET /docs/swagger.json`: the document loaded at startup, or 404.
pub fn swagger_spec(
    _req: Request<Bytes>,
    _params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    match &state.swagger_spec {
        Some(spec) => build_response(200, "application/json", spec.clone()),
        None => Err(RouterError::NotFound("spec not found".to_string())),
    }
}
