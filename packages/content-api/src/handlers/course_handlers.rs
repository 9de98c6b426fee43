//! Course CRUD handlers.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use content_store::CourseFields;

use super::request_utils::{
    id_param, map_store_error_to_router_error, parse_json_object, MatchitParams,
};
use super::response::{build_empty_response, build_json_response};

/// Lists all courses.
///
/// # Endpoint
/// `GET /api/courses`
///
/// # Response
/// - **200 OK**: Array of courses in no particular order
///
/// # Example
/// ```bash
/// curl http://localhost:8000/api/courses
/// ```
pub fn list_courses(
    _req: Request<Bytes>,
    _params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let courses = state
        .store
        .list_courses()
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &courses)
}

/// Creates a new course.
///
/// # Endpoint
/// `POST /api/courses`
///
/// # Request Body
/// ```json
/// {
///   "title": "Rust 101",
///   "description": "Ownership and borrowing",
///   "language": "en",
///   "tags": ["rust"]
/// }
/// ```
///
/// # Response
/// - **201 Created**: The stored course with its generated `id`
/// ```json
/// {
///   "id": "3f0c9a1e-5b2d-4c7e-9a10-2b3c4d5e6f70",
///   "title": "Rust 101",
///   "description": "Ownership and borrowing",
///   "language": "en",
///   "status": "draft",
///   "visibility": "private",
///   "tags": ["rust"]
/// }
/// ```
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON object or `title` is missing
///
/// # Notes
/// - Any `id` in the body is ignored
/// - `status` defaults to `draft`, `visibility` to `private`
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8000/api/courses \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Rust 101"}'
/// ```
pub fn create_course(
    req: Request<Bytes>,
    _params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let fields: CourseFields = parse_json_object(req.body())?;
    let course = state
        .store
        .create_course(fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(201, &course)
}

/// Reads a course.
///
/// # Endpoint
/// `GET /api/courses/{id}`
///
/// # Errors
/// - **404 Not Found**: No course with this id
pub fn get_course(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    let course = state
        .store
        .get_course(&id)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &course)
}

/// Partially updates a course.
///
/// # Endpoint
/// `PUT /api/courses/{id}`
///
/// # Request Body
/// ```json
/// {
///   "title": "Rust 102",
///   "status": "published"
/// }
/// ```
///
/// # Response
/// - **200 OK**: The merged course
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON object
/// - **404 Not Found**: No course with this id
///
/// # Notes
/// - Only non-empty fields overwrite stored values; an empty string or empty
///   `tags` array leaves the field unchanged
pub fn update_course(
    req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    let fields: CourseFields = parse_json_object(req.body())?;
    let course = state
        .store
        .update_course(&id, fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &course)
}

/// Deletes a course.
///
/// # Endpoint
/// `DELETE /api/courses/{id}`
///
/// # Response
/// - **204 No Content**: Always, whether or not the course existed
///
/// # Notes
/// - Sections of the course are left in place
pub fn delete_course(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    state
        .store
        .delete_course(&id)
        .map_err(map_store_error_to_router_error)?;
    build_empty_response(204)
}
