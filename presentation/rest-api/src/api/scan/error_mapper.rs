use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::scan::errors::ScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::upload::UploadError;

impl IntoErrorResponse for ScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ScanError::InvalidFrame => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ScanError",
                "scan.invalid_frame",
            ),
            ScanError::UnsupportedImage => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ScanError",
                "scan.unsupported_image",
            ),
            ScanError::DetectionAborted => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "scan.detection_aborted",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

impl IntoErrorResponse for UploadError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unsupported_image_to_unprocessable_entity() {
        let (status, json) = ScanError::UnsupportedImage.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "scan.unsupported_image");
    }

    #[test]
    fn should_map_aborted_detection_to_internal_error() {
        let (status, json) = ScanError::DetectionAborted.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "scan.detection_aborted");
    }

    #[test]
    fn should_map_invalid_base64_to_bad_request() {
        let (status, json) = UploadError::InvalidBase64.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "upload.invalid_base64");
    }
}
