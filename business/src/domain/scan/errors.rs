/// Errors raised while turning caller input into a scannable frame.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("scan.invalid_frame")]
    InvalidFrame,
    #[error("scan.unsupported_image")]
    UnsupportedImage,
    /// The blocking detection task panicked or was cancelled.
    #[error("scan.detection_aborted")]
    DetectionAborted,
}
