/// Per-endpoint failures while querying the product catalog.
/// Never returned to callers of the lookup; logged and skipped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.timeout")]
    Timeout,
    #[error("catalog.transport: {0}")]
    Transport(String),
    #[error("catalog.invalid_json: {0}")]
    InvalidJson(String),
}
