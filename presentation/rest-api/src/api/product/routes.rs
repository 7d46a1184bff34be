use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::lookup::{LookupProductParams, LookupProductUseCase};

use crate::api::error::ErrorResponse;
use crate::api::product::dto::ProductInfoResponse;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    lookup_use_case: Arc<dyn LookupProductUseCase>,
}

impl ProductApi {
    pub fn new(lookup_use_case: Arc<dyn LookupProductUseCase>) -> Self {
        Self { lookup_use_case }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Look up a product by barcode
    ///
    /// Queries the Open Food Facts endpoints in fallback order. A barcode no
    /// endpoint knows about is still a 200 with `found = false`.
    #[oai(path = "/products/:barcode", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, barcode: Path<String>) -> GetProductResponse {
        let barcode = barcode.0.trim().to_string();
        if barcode.is_empty() {
            return GetProductResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "product.barcode_empty".to_string(),
            }));
        }

        let info = self
            .lookup_use_case
            .execute(LookupProductParams { barcode })
            .await;

        GetProductResponse::Ok(Json(info.into()))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductInfoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
