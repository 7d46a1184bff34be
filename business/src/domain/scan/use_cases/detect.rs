use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::{DecodedBarcode, Frame};

pub struct DetectBarcodesParams {
    pub frame: Frame,
}

/// Synchronous and CPU-bound. Async callers run it on a blocking thread.
pub trait DetectBarcodesUseCase: Send + Sync {
    fn execute(&self, params: DetectBarcodesParams) -> Result<Vec<DecodedBarcode>, ScanError>;
}
