use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint. `message` is a code-style key such as
/// `scan.unsupported_image`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain or request error onto its HTTP status and body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
