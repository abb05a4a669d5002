//! Scanned QR payload normalization.
//!
//! The QR code encodes the bare participant id as plain text, so most
//! scans pass through unchanged. Older codes encoded a URL whose last
//! path segment is the id; the strip-path branch keeps those working.

use crate::error::ValidationError;

/// Normalize raw scanned text into the participant lookup key.
///
/// If the text contains a `/`, the substring after the final one is
/// taken (URL payload compatibility); otherwise the text is used as
/// is. Surrounding whitespace is trimmed. An empty result fails with
/// [`ValidationError::EmptyScan`].
pub fn resolve_scan(raw: &str) -> Result<String, ValidationError> {
    let tail = match raw.rfind('/') {
        Some(pos) => &raw[pos + 1..],
        None => raw,
    };

    let key = tail.trim();
    if key.is_empty() {
        return Err(ValidationError::EmptyScan);
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(resolve_scan("ID123").unwrap(), "ID123");
    }

    #[test]
    fn url_payload_yields_last_segment() {
        assert_eq!(resolve_scan("https://host/qr/ID123").unwrap(), "ID123");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(resolve_scan("  ID123 \n").unwrap(), "ID123");
    }

    #[test]
    fn empty_scan_rejected() {
        assert_eq!(resolve_scan(""), Err(ValidationError::EmptyScan));
        assert_eq!(resolve_scan("   "), Err(ValidationError::EmptyScan));
    }

    #[test]
    fn trailing_slash_rejected() {
        // A URL ending in "/" has no id segment.
        assert_eq!(
            resolve_scan("https://host/qr/"),
            Err(ValidationError::EmptyScan)
        );
    }

    #[test]
    fn uuid_in_url_survives() {
        let id = "3f0c8a1e-5b2d-4e7f-9a6b-1c2d3e4f5a6b";
        let url = format!("https://example.com/qr/{id}");
        assert_eq!(resolve_scan(&url).unwrap(), id);
    }
}
