//! Optional token encryption seam.
//!
//! The host may register an encrypter so tokens are stored encrypted at rest.
//! Whether one is registered is modelled as `Option<&dyn TokenEncrypter>`, so
//! "no encryption configured" stays distinguishable from an identity encrypter.

use crate::error::TokenError;
use crate::token::OAuthToken;

/// Decrypts cached tokens on read.
///
/// Encryption happens wherever the host writes tokens into its store; this
/// side only ever reads.
pub trait TokenEncrypter: Send + Sync {
    fn decrypt(&self, token: OAuthToken) -> Result<OAuthToken, TokenError>;
}

/// Decrypt a token with the registered encrypter, or return it unchanged.
pub fn decrypt_with(
    encrypter: Option<&dyn TokenEncrypter>,
    token: OAuthToken,
) -> Result<OAuthToken, TokenError> {
    match encrypter {
        Some(encrypter) => encrypter.decrypt(token),
        None => Ok(token),
    }
}
