//! Error types for token handling.

use thiserror::Error;

/// Errors that can occur while turning a cached token into claims.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token does not have exactly three dot-separated segments.
    #[error("malformed token: expected 3 dot-separated segments, found {segments}")]
    MalformedToken { segments: usize },

    /// Payload could not be decoded into the expected claims.
    #[error("failed to decode token claims: {0}")]
    ClaimDecode(#[from] ClaimDecodeError),

    /// The registered decryptor rejected the token.
    #[error("failed to decrypt token: {0}")]
    DecryptionFailed(String),

    /// Claims could not be serialized into a token.
    #[error("token serialization error: {0}")]
    SerializationError(String),
}

/// Ways the payload segment can fail to yield the expected claims.
#[derive(Debug, Error)]
pub enum ClaimDecodeError {
    /// The payload segment is empty.
    #[error("token payload segment is empty")]
    EmptyPayload,

    /// The payload segment is not base64.
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload is not UTF-8 text.
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The decoded payload is not JSON.
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded payload is JSON but not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required claim is absent.
    #[error("token missing required claim: {claim}")]
    MissingClaim { claim: String },

    /// A claim is present but does not have the expected shape.
    #[error("claim '{claim}' has unexpected shape: {reason}")]
    InvalidClaim { claim: String, reason: String },
}
