//! HTTP endpoint implementations.

mod course_handlers;
mod docs_handlers;
mod material_handlers;
mod media_handlers;
mod request_utils;
mod response;
mod section_handlers;

pub use course_handlers::{create_course, delete_course, get_course, list_courses, update_course};
pub use docs_handlers::{docs_page, load_swagger_spec, swagger_spec};
pub use material_handlers::{create_material, delete_material, list_materials, update_material};
pub use media_handlers::{media_status, media_stream, MediaStatus};
pub use request_utils::{
    map_store_error_to_router_error, read_request_body_with_timeout, MatchitParams,
};
pub use response::{error_response, ApiError, ErrorResponse};
pub use section_handlers::{create_section, delete_section, list_sections, update_section};
