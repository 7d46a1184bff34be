use async_trait::async_trait;

use crate::domain::product::model::ProductInfo;

pub struct LookupProductParams {
    pub barcode: String,
}

/// Never fails: an exhausted endpoint list yields a not-found `ProductInfo`.
#[async_trait]
pub trait LookupProductUseCase: Send + Sync {
    async fn execute(&self, params: LookupProductParams) -> ProductInfo;
}
