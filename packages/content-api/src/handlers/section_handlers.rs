//! Section handlers, nested under courses for listing and creation.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use content_store::SectionFields;

use super::request_utils::{
    id_param, map_store_error_to_router_error, parse_json_object, MatchitParams,
};
use super::response::{build_empty_response, build_json_response};

/// Lists the sections of a course.
///
/// # Endpoint
/// `GET /api/courses/{id}/sections`
///
/// # Response
/// - **200 OK**: Array of sections whose `course_id` is `{id}`; empty for an
///   unknown course
pub fn list_sections(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let course_id = id_param(&params)?;
    let sections = state
        .store
        .list_sections(Some(&course_id))
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &sections)
}

/// Creates a section under a course.
///
/// # Endpoint
/// `POST /api/courses/{id}/sections`
///
/// # Request Body
/// ```json
/// {
///   "title": "Getting started",
///   "sequence": 1
/// }
/// ```
///
/// # Response
/// - **201 Created**: The stored section
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON object or `title` is missing
///
/// # Notes
/// - The course is not required to exist
pub fn create_section(
    req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let course_id = id_param(&params)?;
    let fields: SectionFields = parse_json_object(req.body())?;
    let section = state
        .store
        .create_section(&course_id, fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(201, &section)
}

/// `PUT /api/sections/{id}`. A `sequence` of 0 leaves the stored sequence unchanged.
pub fn update_section(
    req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    let fields: SectionFields = parse_json_object(req.body())?;
    let section = state
        .store
        .update_section(&id, fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &section)
}

/// `DELETE /api/sections/{id}`, always 204.
pub fn delete_section(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    state
        .store
        .delete_section(&id)
        .map_err(map_store_error_to_router_error)?;
    build_empty_response(204)
}
