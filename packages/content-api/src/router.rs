//! Matchit routing configuration.

use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use matchit::Router as MatchitRouter;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::handlers;
use content_store::ContentStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Content store instance
    pub store: Arc<ContentStore>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Swagger document loaded at startup, if it could be read
    pub swagger_spec: Option<Bytes>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the content service routes.
    pub fn new(
        store: Arc<ContentStore>,
        config: Arc<ApiConfig>,
        swagger_spec: Option<Bytes>,
    ) -> Self {
        let mut router = MatchitRouter::new();

        let routes = [
            // Course endpoints
            ("/api/courses", RouteHandler::Courses),
            ("/api/courses/{id}", RouteHandler::Course),
            ("/api/courses/{id}/sections", RouteHandler::CourseSections),
            // Section endpoints
            ("/api/sections/{id}", RouteHandler::Section),
            ("/api/sections/{id}/materials", RouteHandler::SectionMaterials),
            // Material endpoints
            ("/api/materials/{id}", RouteHandler::Material),
            // Media placeholder
            ("/api/media/{id}/status", RouteHandler::MediaStatus),
            ("/api/media/{id}/stream", RouteHandler::MediaStream),
            // Documentation
            ("/docs", RouteHandler::Docs),
            ("/docs/swagger.json", RouteHandler::DocsSpec),
        ];
        for (path, handler) in routes {
            // The route table is static; a conflict here is a programming error.
            router
                .insert(path, handler)
                .unwrap_or_else(|e| panic!("Failed to insert {} route: {}", path, e));
        }

        Self {
            inner: router,
            state: AppState {
                store,
                config,
                swagger_spec,
            },
        }
    }

    /// Returns the shared state handed to every handler.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Routes an incoming request and renders any error as a JSON response.
    pub async fn route<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.dispatch(req).await {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::debug!(%method, %path, status, "request handled");
                response
            }
            Err(err) => {
                match &err {
                    RouterError::InternalError(msg) => {
                        tracing::error!(%method, %path, "internal error: {}", msg)
                    }
                    other => tracing::debug!(%method, %path, "request rejected: {}", other),
                }
                Response::from(err)
            }
        }
    }

    /// Matches the path and method, then reads the body and invokes the handler.
    ///
    /// The method is checked before the body is read, so an unsupported verb
    /// is answered with 405 whatever the body does.
    async fn dispatch<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let path = normalize_path(req.uri().path()).to_string();

        let matched = self
            .inner
            .at(&path)
            .map_err(|_| RouterError::NotFound(format!("No route found for {}", path)))?;
        let handler = matched
            .value
            .resolve(req.method())
            .ok_or(RouterError::MethodNotAllowed)?;

        let timeout_ms = self.state.config.request_timeout_ms;
        let req = handlers::read_request_body_with_timeout(req, timeout_ms).await?;

        handler(req, matched.params, &self.state)
    }
}

/// Strips trailing slashes so `/api/courses/x/` matches `/api/courses/{id}`.
fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Handler signature shared by every endpoint.
type HandlerFn = for<'k, 'v, 's> fn(
    Request<Bytes>,
    matchit::Params<'k, 'v>,
    &'s AppState,
) -> Result<Response<Bytes>, RouterError>;

/// Route handler function.
#[derive(Debug, Clone, Copy)]
enum RouteHandler {
    Courses,
    Course,
    CourseSections,
    Section,
    SectionMaterials,
    Material,
    MediaStatus,
    MediaStream,
    Docs,
    DocsSpec,
}

impl RouteHandler {
    /// Returns the handler for `method`, or `None` if the route does not accept it.
    fn resolve(self, method: &Method) -> Option<HandlerFn> {
        let handler: HandlerFn = match (self, method) {
            (RouteHandler::Courses, &Method::GET) => handlers::list_courses,
            (RouteHandler::Courses, &Method::POST) => handlers::create_course,

            (RouteHandler::Course, &Method::GET) => handlers::get_course,
            (RouteHandler::Course, &Method::PUT) => handlers::update_course,
            (RouteHandler::Course, &Method::DELETE) => handlers::delete_course,

            (RouteHandler::CourseSections, &Method::GET) => handlers::list_sections,
            (RouteHandler::CourseSections, &Method::POST) => handlers::create_section,

            (RouteHandler::Section, &Method::PUT) => handlers::update_section,
            (RouteHandler::Section, &Method::DELETE) => handlers::delete_section,

            (RouteHandler::SectionMaterials, &Method::GET) => handlers::list_materials,
            (RouteHandler::SectionMaterials, &Method::POST) => handlers::create_material,

            (RouteHandler::Material, &Method::PUT) => handlers::update_material,
            (RouteHandler::Material, &Method::DELETE) => handlers::delete_material,

            (RouteHandler::MediaStatus, &Method::GET) => handlers::media_status,
            (RouteHandler::MediaStream, &Method::GET) => handlers::media_stream,

            (RouteHandler::Docs, &Method::GET) => handlers::docs_page,
            (RouteHandler::DocsSpec, &Method::GET) => handlers::swagger_spec,

            _ => return None,
        };
        Some(handler)
    }
}

/// Router error type.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Error: {0}")]
    InternalError(String),
    #[error("Request Timeout")]
    Timeout,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
}

impl RouterError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::InternalError(_) => 500,
            RouterError::Timeout => 408,
            RouterError::BadRequest(_) => 400,
            RouterError::NotFound(_) => 404,
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let message = match &err {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::Timeout => "Request Timeout",
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg) => msg.as_str(),
        };

        let error_response = handlers::error_response(status, message.to_string(), None);
        let body = serde_json::to_vec(&error_response).unwrap_or_else(|e| {
            format!(
                "{{\"success\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\"}}}}",
                e
            )
            .into_bytes()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from_static(b"Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
