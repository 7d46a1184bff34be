use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanReport;

pub struct ScanImageParams {
    /// Encoded image bytes (PNG, JPEG, ...).
    pub image: Vec<u8>,
}

#[async_trait]
pub trait ScanImageUseCase: Send + Sync {
    async fn execute(&self, params: ScanImageParams) -> Result<ScanReport, ScanError>;
}
