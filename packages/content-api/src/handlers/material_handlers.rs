//! Material handlers.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};
use content_store::MaterialFields;

use super::request_utils::{
    id_param, map_store_error_to_router_error, parse_json_object, MatchitParams,
};
use super::response::{build_empty_response, build_json_response};

/// `GET /api/sections/{id}/materials`
pub fn list_materials(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let section_id = id_param(&params)?;
    let materials = state
        .store
        .list_materials(Some(&section_id))
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &materials)
}

/// Creates a material under a section.
///
/// # Endpoint
/// `POST /api/sections/{id}/materials`
///
/// # Request Body
/// ```json
/// {
///   "type": "video",
///   "title": "Welcome"
/// }
/// ```
///
/// # Errors
/// - **400 Bad Request**: Body is not a JSON object, or `title` or `type` is missing
pub fn create_material(
    req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let section_id = id_param(&params)?;
    let fields: MaterialFields = parse_json_object(req.body())?;
    let material = state
        .store
        .create_material(&section_id, fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(201, &material)
}

/// `PUT /api/materials/{id}`
pub fn update_material(
    req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    let fields: MaterialFields = parse_json_object(req.body())?;
    let material = state
        .store
        .update_material(&id, fields)
        .map_err(map_store_error_to_router_error)?;
    build_json_response(200, &material)
}

/// `DELETE /api/materials/{id}`
pub fn delete_material(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = id_param(&params)?;
    state
        .store
        .delete_material(&id)
        .map_err(map_store_error_to_router_error)?;
    build_empty_response(204)
}
