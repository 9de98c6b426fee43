//! Media placeholder endpoints.
//!
//! There is no media pipeline behind these routes: every file reports as
//! queued and streams redirect to an external URL.

use hyper::{body::Bytes, Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::router::{AppState, RouterError};

use super::request_utils::{id_param, MatchitParams};
use super::response::{build_json_response, build_redirect_response};

/// Characters escaped when a media id is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Status reported for every media file.
pub const QUEUED: &str = "queued";

/// Processing status of a media file.
#[derive(Debug, Serialize)]
pub struct MediaStatus {
    pub media_file_id: String,
    pub status: String,
}

/// Reports the processing status of a media file.
///
/// # Endpoint
/// `GET /api/media/{id}/status`
///
/// # Response
/// - **200 OK**
/// ```json
/// {
///   "media_file_id": "abc",
///   "status": "queued"
/// }
/// ```
pub fn media_status(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    _state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let media_file_id = id_param(&params)?;
    build_json_response(
        200,
        &MediaStatus {
            media_file_id,
            status: QUEUED.to_string(),
        },
    )
}

/// Redirects to the external stream for a media file.
///
/// # Endpoint
/// `GET /api/media/{id}/stream`
///
/// # Response
/// - **302 Found**: `Location: <stream_base_url>/{id}`
pub fn media_stream(
    _req: Request<Bytes>,
    params: MatchitParams<'_, '_>,
    state: &AppState,
) -> Result<Response<Bytes>, RouterError> {
    let media_file_id = id_param(&params)?;
    let location = stream_url(&state.config.stream_base_url, &media_file_id);
    build_redirect_response(&location)
}

fn stream_url(base: &str, media_file_id: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        utf8_percent_encode(media_file_id, PATH_SEGMENT)
    )
}
