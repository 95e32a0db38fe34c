use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::errors::EraBlenderError;

/// Decodes an inline image payload, stripping an optional
/// `data:image/...;base64,` prefix first.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, EraBlenderError> {
    let encoded = match payload.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or(EraBlenderError::InvalidImageEncoding)?,
        None => payload,
    };
    Ok(STANDARD.decode(encoded)?)
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn to_data_url(mime_type: &str, encoded: &str) -> String {
    format!("data:{};base64,{}", mime_type, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_and_raw_payloads_decode_identically() {
        let raw = STANDARD.encode(b"fake image bytes");
        let prefixed = format!("data:image/png;base64,{}", raw);

        assert_eq!(
            decode_image_payload(&prefixed).unwrap(),
            decode_image_payload(&raw).unwrap()
        );
        assert_eq!(decode_image_payload(&raw).unwrap(), b"fake image bytes");
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let error = decode_image_payload("this is !!! not base64").unwrap_err();
        assert_eq!(error, EraBlenderError::InvalidImageEncoding);
    }

    #[test]
    fn test_data_url_without_base64_marker_is_rejected() {
        let error = decode_image_payload("data:image/png,plainpayload").unwrap_err();
        assert_eq!(error, EraBlenderError::InvalidImageEncoding);
    }

    #[test]
    fn test_data_url_round_trip() {
        let encoded = encode_base64(b"jpeg bytes");
        let url = to_data_url("image/jpeg", &encoded);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_image_payload(&url).unwrap(), b"jpeg bytes");
    }
}
