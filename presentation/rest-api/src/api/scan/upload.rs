use base64::{Engine, engine::general_purpose::STANDARD};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("upload.invalid_base64")]
    InvalidBase64,
}

/// Decodes an uploaded image given either as raw base64 or as a data URL.
/// Whitespace inside the payload is ignored.
pub fn decode_image_base64(raw: &str) -> Result<Vec<u8>, UploadError> {
    let stripped = Regex::new(r"^data:[a-zA-Z0-9.+/-]*;base64,")
        .map(|re| re.replace(raw.trim(), "").to_string())
        .unwrap_or_else(|_| raw.trim().to_string());
    let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

    STANDARD
        .decode(clean.as_bytes())
        .map_err(|_| UploadError::InvalidBase64)
}
