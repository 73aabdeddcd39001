//! The `v2.public` engine: Ed25519 signatures over the pre-authentication
//! encoding.
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::base64url;
use crate::error::PasetoError;
use crate::key::{Ed25519PublicKey, Ed25519SecretKey};
use crate::pae::PreAuthenticationEncoding;

const HEADER: &[u8] = b"v2.public.";
const SIG_LEN: usize = 64;

/// A verified `v2.public` token's message and footer.
#[derive(Debug, PartialEq, Eq)]
pub struct VerifiedPublic {
  pub message: Vec<u8>,
  pub footer: Vec<u8>,
}

/// Signs `message` with `secret`, authenticating `footer`, and returns the
/// assembled `v2.public[.footer]` token.
pub fn sign(secret: &Ed25519SecretKey, message: &[u8], footer: &[u8]) -> Result<Vec<u8>, PasetoError> {
  let keypair_bytes: &[u8; 64] = secret
    .as_ref()
    .try_into()
    .map_err(|_| PasetoError::ConfigError("ed25519 secret key must be 64 bytes".into()))?;
  let signing_key =
    SigningKey::from_keypair_bytes(keypair_bytes).map_err(|_| PasetoError::ConfigError("invalid ed25519 secret key".into()))?;

  let pae = PreAuthenticationEncoding::parse(&[HEADER, message, footer]);
  let signature = signing_key.sign(&pae);

  let mut body = Vec::with_capacity(message.len() + SIG_LEN);
  body.extend_from_slice(message);
  body.extend_from_slice(&signature.to_bytes());

  let mut token = Vec::new();
  token.extend_from_slice(HEADER);
  token.extend_from_slice(base64url::encode(&body).as_bytes());
  if !footer.is_empty() {
    token.push(b'.');
    token.extend_from_slice(base64url::encode(footer).as_bytes());
  }
  Ok(token)
}

/// Verifies a `v2.public[.footer]` token against `public`, returning the
/// signed message and any footer found on the wire.
pub fn verify(public: &Ed25519PublicKey, token: &[u8]) -> Result<VerifiedPublic, PasetoError> {
  let token = std::str::from_utf8(token).map_err(|_| PasetoError::MalformedToken)?;
  let parts: Vec<&str> = token.split('.').collect();
  if parts.len() < 3 || parts.len() > 4 {
    return Err(PasetoError::MalformedToken);
  }
  if parts[0].as_bytes() != b"v2" || parts[1].as_bytes() != b"public" {
    return Err(PasetoError::MalformedToken);
  }

  let footer = match parts.get(3) {
    Some(encoded) => base64url::decode(encoded)?,
    None => Vec::new(),
  };

  let body = base64url::decode(parts[2])?;
  if body.len() < SIG_LEN {
    return Err(PasetoError::MalformedToken);
  }
  let (message, sig_bytes) = body.split_at(body.len() - SIG_LEN);

  let public_bytes: &[u8; 32] = public
    .as_ref()
    .try_into()
    .map_err(|_| PasetoError::ConfigError("ed25519 public key must be 32 bytes".into()))?;
  let verifying_key = VerifyingKey::from_bytes(public_bytes).map_err(|_| PasetoError::ConfigError("invalid ed25519 public key".into()))?;
  let signature = Signature::try_from(sig_bytes).map_err(|_| PasetoError::MalformedToken)?;

  let pae = PreAuthenticationEncoding::parse(&[HEADER, message, &footer]);
  verifying_key
    .verify(&pae, &signature)
    .map_err(|_| PasetoError::InvalidSignature)?;

  Ok(VerifiedPublic {
    message: message.to_vec(),
    footer,
  })
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::key::Key;

  fn keypair_vector() -> (Ed25519SecretKey, Ed25519PublicKey) {
    let secret = Key::try_from(
      "b4cbfb43df4ce210727d953e4a713307fa19bb7d9f85041438d9e11b942a37741eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2",
    )
    .unwrap();
    let public = Key::try_from("1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2").unwrap();
    (secret, public)
  }

  #[test]
  fn sign_verify_round_trip() {
    let (secret, public) = keypair_vector();
    let token = sign(&secret, b"hello world", b"a footer").unwrap();
    let verified = verify(&public, &token).unwrap();
    assert_eq!(verified.message, b"hello world");
    assert_eq!(verified.footer, b"a footer");
  }

  #[test]
  fn single_bit_flip_fails_verification() {
    let (secret, public) = keypair_vector();
    let mut token = sign(&secret, b"tamper with me", b"").unwrap();
    let last = token.len() - 1;
    token[last] = if token[last] == b'A' { b'B' } else { b'A' };
    assert!(matches!(verify(&public, &token), Err(PasetoError::InvalidSignature) | Err(PasetoError::MalformedToken)));
  }
}
