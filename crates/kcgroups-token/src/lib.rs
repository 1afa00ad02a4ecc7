//! # kcgroups-token
//!
//! OAuth access token handling for kcgroups.
//!
//! This crate provides:
//! - Decoding the claim set out of a cached JWT-shaped access token
//! - The token store seam (account id -> cached token) and an in-memory store
//! - The optional token decryptor seam
//!
//! ## Token Format
//!
//! | Segment | Content | Used here |
//! |---------|---------|-----------|
//! | 1 | Header | No |
//! | 2 | Payload: base64 JSON object | Yes, claims are read from it |
//! | 3 | Signature | No |
//!
//! Tokens are never verified here. They are read from the token store, which
//! owns custody of them, and are trusted on that basis.

pub mod claims;
pub mod decoder;
pub mod encrypter;
pub mod error;
pub mod store;
pub mod token;

pub use claims::ClaimSet;
pub use decoder::{decode_claims, encode_unsigned};
pub use encrypter::TokenEncrypter;
pub use error::{ClaimDecodeError, TokenError};
pub use store::{InMemoryTokenStore, TokenStore};
pub use token::OAuthToken;
