use thiserror::Error;

/// Stable error taxonomy shared by every component of the crate.
///
/// No variant carries raw key material or plaintext; decrypt/verify
/// failures collapse to [`PasetoError::CryptoFailure`] or
/// [`PasetoError::InvalidSignature`] rather than leaking which internal
/// step failed.
#[derive(Debug, Error)]
pub enum PasetoError {
  /// Wrong part count, bad base64, bad header, or a body shorter than the
  /// minimum for its purpose.
  #[error("the token is malformed")]
  MalformedToken,

  /// The AEAD tag did not verify on decrypt.
  #[error("decryption failed")]
  CryptoFailure,

  /// Ed25519 signature verification returned false.
  #[error("the token signature could not be verified")]
  InvalidSignature,

  /// `exp` was present, validation was requested, and `exp` is in the past.
  #[error("the token has expired")]
  TokenExpired,

  /// A `required_claims` entry was missing, or `exp` failed to parse.
  #[error("claim validation failed: {0}")]
  ValidationError(String),

  /// Unknown `purpose`, wrong key size, or another bad argument.
  #[error("invalid configuration: {0}")]
  ConfigError(String),
}
