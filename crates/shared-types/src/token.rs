//! # Access Tokens
//!
//! Opaque bearer tokens for pool access.
//!
//! Every pool carries two tokens: the public token that names the pool in
//! URLs, and the reveal token handed to a participant after a successful
//! submission. Both are 16 bytes of OS randomness rendered as 32 lowercase
//! hex characters. Equality is constant-time so a credential check leaks
//! nothing through timing.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Raw token width in bytes.
pub const TOKEN_BYTES: usize = 16;

/// Rendered token width in hex characters.
pub const TOKEN_CHARS: usize = TOKEN_BYTES * 2;

/// Failure to interpret a string as a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed access token")]
pub struct TokenParseError;

/// An unguessable 128-bit bearer token.
///
/// `Debug` is redacted: tokens are credentials and must never reach logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken([u8; TOKEN_BYTES]);

impl AccessToken {
    /// Generate a fresh token from OS randomness.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Generate a (public, reveal) pair, guaranteed distinct.
    pub fn generate_distinct_pair() -> (Self, Self) {
        let public = Self::generate();
        loop {
            let reveal = Self::generate();
            if reveal != public {
                return (public, reveal);
            }
        }
    }

    /// Parse the canonical 32-character lowercase hex form.
    ///
    /// Uppercase digits are rejected: credentials match on the exact string
    /// a client was issued, nothing looser.
    pub fn parse(s: &str) -> Result<Self, TokenParseError> {
        if s.len() != TOKEN_CHARS || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(TokenParseError);
        }
        let decoded = hex::decode(s).map_err(|_| TokenParseError)?;
        let mut bytes = [0u8; TOKEN_BYTES];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for AccessToken {}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

impl From<AccessToken> for String {
    fn from(token: AccessToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for AccessToken {
    type Error = TokenParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
