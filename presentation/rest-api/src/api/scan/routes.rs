use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::scan::use_cases::scan_image::{ScanImageParams, ScanImageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::{ScanImageRequest, ScanResponse};
use crate::api::scan::upload::decode_image_base64;
use crate::api::tags::ApiTags;

pub struct ScanApi {
    scan_use_case: Arc<dyn ScanImageUseCase>,
}

impl ScanApi {
    pub fn new(scan_use_case: Arc<dyn ScanImageUseCase>) -> Self {
        Self { scan_use_case }
    }
}

/// Barcode scanning API
#[OpenApi]
impl ScanApi {
    /// Scan an image
    ///
    /// Runs every preprocessing variant through the decoder, then looks up
    /// each unique barcode in the product catalog.
    #[oai(path = "/scans", method = "post", tag = "ApiTags::Scans")]
    async fn scan_image(&self, body: Json<ScanImageRequest>) -> ScanImageResponse {
        let image = match decode_image_base64(&body.0.image_base64) {
            Ok(image) => image,
            Err(err) => {
                let (_, json) = err.into_error_response();
                return ScanImageResponse::BadRequest(json);
            }
        };

        match self.scan_use_case.execute(ScanImageParams { image }).await {
            Ok(report) => ScanImageResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => ScanImageResponse::UnprocessableEntity(json),
                    _ => ScanImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanImageResponse {
    #[oai(status = 200)]
    Ok(Json<ScanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::scan::errors::ScanError;
    use business::domain::scan::model::ScanReport;
    use mockall::mock;

    mock! {
        pub Scan {}

        #[async_trait]
        impl ScanImageUseCase for Scan {
            async fn execute(&self, params: ScanImageParams) -> Result<ScanReport, ScanError>;
        }
    }

    fn request(image_base64: &str) -> Json<ScanImageRequest> {
        Json(ScanImageRequest {
            image_base64: image_base64.to_string(),
        })
    }

    #[tokio::test]
    async fn should_reject_invalid_base64_without_scanning() {
        let mut scan = MockScan::new();
        scan.expect_execute().never();
        let api = ScanApi::new(Arc::new(scan));

        let response = api.scan_image(request("%%%")).await;

        assert!(matches!(response, ScanImageResponse::BadRequest(_)));
    }

    #[tokio::test]
    async fn should_pass_decoded_bytes_to_scan() {
        let mut scan = MockScan::new();
        scan.expect_execute()
            .withf(|params| params.image == b"hello")
            .times(1)
            .returning(|_| Ok(ScanReport::NoBarcodeDetected));
        let api = ScanApi::new(Arc::new(scan));

        let response = api
            .scan_image(request("data:image/jpeg;base64,aGVsbG8="))
            .await;

        let ScanImageResponse::Ok(Json(body)) = response else {
            panic!("expected 200");
        };
        assert!(!body.detected);
    }

    #[tokio::test]
    async fn should_map_unreadable_image_to_unprocessable_entity() {
        let mut scan = MockScan::new();
        scan.expect_execute()
            .returning(|_| Err(ScanError::UnsupportedImage));
        let api = ScanApi::new(Arc::new(scan));

        let response = api.scan_image(request("aGVsbG8=")).await;

        let ScanImageResponse::UnprocessableEntity(Json(error)) = response else {
            panic!("expected 422");
        };
        assert_eq!(error.message, "scan.unsupported_image");
    }

    #[tokio::test]
    async fn should_map_aborted_detection_to_internal_error() {
        let mut scan = MockScan::new();
        scan.expect_execute()
            .returning(|_| Err(ScanError::DetectionAborted));
        let api = ScanApi::new(Arc::new(scan));

        let response = api.scan_image(request("aGVsbG8=")).await;

        assert!(matches!(response, ScanImageResponse::InternalError(_)));
    }
}
