//! Claim extraction from JWT-shaped access tokens.
//!
//! Trust boundary: signatures are NOT verified. A token reaching this module
//! was read from the token store, which is responsible for having obtained it
//! from the identity provider. Anything able to write to that store can
//! therefore assert arbitrary group memberships.

use crate::claims::ClaimSet;
use crate::error::{ClaimDecodeError, TokenError};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

/// Standard alphabet, padding optional.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// URL-safe alphabet, padding optional. JWTs issued by most providers use it.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

const UNSIGNED_HEADER: &str = r#"{"alg":"none","typ":"JWT"}"#;

/// Return the payload (middle) segment of a token.
pub fn payload_segment(token: &str) -> Result<&str, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::MalformedToken {
            segments: parts.len(),
        });
    }
    Ok(parts[1])
}

/// Decode the raw payload bytes of a token.
pub fn decode_payload(token: &str) -> Result<Vec<u8>, TokenError> {
    let segment = payload_segment(token)?;
    if segment.is_empty() {
        return Err(ClaimDecodeError::EmptyPayload.into());
    }

    let bytes = STANDARD_LENIENT
        .decode(segment)
        .or_else(|err| URL_SAFE_LENIENT.decode(segment).map_err(|_| err))
        .map_err(ClaimDecodeError::from)?;
    Ok(bytes)
}

/// Decode the claim set carried by a token.
pub fn decode_claims(token: &str) -> Result<ClaimSet, TokenError> {
    let bytes = decode_payload(token)?;
    let text = String::from_utf8(bytes).map_err(ClaimDecodeError::from)?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(ClaimDecodeError::from)?;
    let claims = ClaimSet::from_value(value)?;
    tracing::trace!(claims = claims.len(), "decoded token payload");
    Ok(claims)
}

/// Encode a claim set into an unsigned token (`alg: none`, empty signature).
///
/// Only useful for tests and local tooling: the decoder accepts these because
/// it never checks signatures.
pub fn encode_unsigned(claims: &ClaimSet) -> Result<String, TokenError> {
    let payload =
        serde_json::to_vec(claims).map_err(|e| TokenError::SerializationError(e.to_string()))?;

    Ok(format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(UNSIGNED_HEADER),
        URL_SAFE_NO_PAD.encode(payload)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use serde_json::json;

    fn token_with_payload(payload: &str) -> String {
        format!("eyJhbGciOiJSUzI1NiJ9.{}.c2lnbmF0dXJl", payload)
    }

    #[test]
    fn test_decode_standard_padded_payload() {
        let payload = STANDARD.encode(r#"{"group_membership":["teamA"]}"#);
        let claims = decode_claims(&token_with_payload(&payload)).unwrap();
        assert_eq!(claims.get("group_membership"), Some(&json!(["teamA"])));
    }

    #[test]
    fn test_decode_url_safe_unpadded_payload() {
        // `~~~` encodes with a `-`, which only the URL-safe alphabet accepts.
        let payload = URL_SAFE_NO_PAD.encode(r#"{"name":"~~~"}"#);
        assert!(payload.contains('-'));
        let claims = decode_claims(&token_with_payload(&payload)).unwrap();
        assert_eq!(claims.get("name"), Some(&json!("~~~")));
    }

    #[test]
    fn test_two_segments_is_malformed() {
        let err = decode_claims("header.payload").unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { segments: 2 }));
    }

    #[test]
    fn test_four_segments_is_malformed() {
        let err = decode_claims("a.b.c.d").unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { segments: 4 }));
    }

    #[test]
    fn test_trailing_empty_segments_are_counted() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"alice"}"#);

        // Empty signature: still three segments.
        let claims = decode_claims(&format!("h.{payload}.")).unwrap();
        assert_eq!(claims.subject(), Some("alice"));

        // A trailing dot after the signature adds a fourth.
        let err = decode_claims(&format!("h.{payload}.s.")).unwrap_err();
        assert!(matches!(err, TokenError::MalformedToken { segments: 4 }));
    }

    #[test]
    fn test_empty_payload() {
        let err = decode_claims("header..signature").unwrap_err();
        assert!(matches!(
            err,
            TokenError::ClaimDecode(ClaimDecodeError::EmptyPayload)
        ));
    }

    #[test]
    fn test_invalid_base64() {
        let err = decode_claims(&token_with_payload("not*base64!")).unwrap_err();
        assert!(matches!(err, TokenError::ClaimDecode(ClaimDecodeError::Base64(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        let payload = STANDARD.encode([0xff, 0xfe, 0xfd]);
        let err = decode_claims(&token_with_payload(&payload)).unwrap_err();
        assert!(matches!(err, TokenError::ClaimDecode(ClaimDecodeError::Utf8(_))));
    }

    #[test]
    fn test_invalid_json() {
        let payload = STANDARD.encode("group_membership=teamA");
        let err = decode_claims(&token_with_payload(&payload)).unwrap_err();
        assert!(matches!(err, TokenError::ClaimDecode(ClaimDecodeError::Json(_))));
    }

    #[test]
    fn test_payload_must_be_object() {
        let payload = STANDARD.encode(r#"["teamA"]"#);
        let err = decode_claims(&token_with_payload(&payload)).unwrap_err();
        assert!(matches!(
            err,
            TokenError::ClaimDecode(ClaimDecodeError::NotAnObject)
        ));
    }

    #[test]
    fn test_encode_unsigned_is_decodable() {
        let claims = ClaimSet::new()
            .with_claim("sub", "alice")
            .with_claim("group_membership", json!(["teamA", "teamB"]));

        let token = encode_unsigned(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert!(token.ends_with('.'));
        assert_eq!(decode_claims(&token).unwrap(), claims);
    }
}
