use crate::error::{Result, SvgconError};

/// The literal prefix valid clipboard payloads must start with (after trimming)
pub const SVG_PREFIX: &str = "<svg";

/// Validates a clipboard payload as SVG markup.
///
/// # Errors
///
/// Returns `SvgconError::InvalidSvgPayload` if the payload is empty or its
/// trimmed form does not start with `<svg`.
pub fn validate_payload(payload: &str) -> Result<()> {
    if payload.trim_start().starts_with(SVG_PREFIX) {
        Ok(())
    } else {
        Err(SvgconError::InvalidSvgPayload)
    }
}

/// Removes every whitespace character, for content-equality comparison.
pub fn normalize_whitespace(content: &str) -> String {
    content.chars().filter(|c| !c.is_whitespace()).collect()
}
