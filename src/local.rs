//! The `v2.local` engine: symmetric authenticated encryption.
//!
//! Derives a per-message nonce via a keyed BLAKE2b hash before handing off
//! to AEAD, then assembles/parses the `v2.local[.footer]` wire format.
use blake2::digest::{FixedOutput, Mac};
use blake2::Blake2bMac;
use chacha20poly1305::aead::Aead;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use generic_array::typenum::U24;

use crate::base64url;
use crate::error::PasetoError;
use crate::key::SymmetricKey;
use crate::pae::PreAuthenticationEncoding;

const HEADER: &[u8] = b"v2.local.";
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;

/// The decrypted contents of a `v2.local` token.
#[derive(Debug, PartialEq, Eq)]
pub struct DecryptedLocal {
  pub plaintext: Vec<u8>,
  pub footer: Vec<u8>,
}

fn derive_nonce(random_seed: &[u8; NONCE_LEN], plaintext: &[u8]) -> [u8; NONCE_LEN] {
  let mut mac = Blake2bMac::<U24>::new_from_slice(random_seed)
    .unwrap_or_else(|_| unreachable!("24-byte key is always a valid Blake2b MAC key"));
  mac.update(plaintext);
  let mut out = [0u8; NONCE_LEN];
  mac.finalize_into((&mut out).into());
  out
}

fn random_seed() -> Result<[u8; NONCE_LEN], PasetoError> {
  #[cfg(any(test, feature = "test-seam"))]
  if let Some(fixed) = crate::nonce::take_override() {
    return Ok(fixed);
  }
  let key = crate::key::Key::<NONCE_LEN>::try_new_random()?;
  let mut out = [0u8; NONCE_LEN];
  out.copy_from_slice(key.as_ref());
  Ok(out)
}

/// Encrypts `plaintext` for `key`, authenticating `footer` without
/// encrypting it, and returns the assembled `v2.local[.footer]` token.
pub fn encrypt(key: &SymmetricKey, plaintext: &[u8], footer: &[u8]) -> Result<Vec<u8>, PasetoError> {
  let seed = random_seed()?;
  let nonce24 = derive_nonce(&seed, plaintext);

  let aad = PreAuthenticationEncoding::parse(&[HEADER, &nonce24, footer]);
  let aead = XChaCha20Poly1305::new_from_slice(key.as_ref())
    .map_err(|_| PasetoError::ConfigError("symmetric key must be 32 bytes".into()))?;
  let ciphertext_and_tag = aead
    .encrypt(
      XNonce::from_slice(&nonce24),
      chacha20poly1305::aead::Payload {
        msg: plaintext,
        aad: aad.as_ref(),
      },
    )
    .map_err(|_| PasetoError::CryptoFailure)?;

  let mut body = Vec::with_capacity(NONCE_LEN + ciphertext_and_tag.len());
  body.extend_from_slice(&nonce24);
  body.extend_from_slice(&ciphertext_and_tag);

  let mut token = Vec::new();
  token.extend_from_slice(HEADER);
  token.extend_from_slice(base64url::encode(&body).as_bytes());
  if !footer.is_empty() {
    token.push(b'.');
    token.extend_from_slice(base64url::encode(footer).as_bytes());
  }
  Ok(token)
}

/// Decrypts a `v2.local[.footer]` token, returning the plaintext and any
/// footer found on the wire.
pub fn decrypt(key: &SymmetricKey, token: &[u8]) -> Result<DecryptedLocal, PasetoError> {
  let token = std::str::from_utf8(token).map_err(|_| PasetoError::MalformedToken)?;
  let parts: Vec<&str> = token.split('.').collect();
  if parts.len() < 3 || parts.len() > 4 {
    return Err(PasetoError::MalformedToken);
  }
  if parts[0].as_bytes() != b"v2" || parts[1].as_bytes() != b"local" {
    return Err(PasetoError::MalformedToken);
  }

  let footer = match parts.get(3) {
    Some(encoded) => base64url::decode(encoded)?,
    None => Vec::new(),
  };

  let body = base64url::decode(parts[2])?;
  if body.len() < NONCE_LEN + TAG_LEN {
    return Err(PasetoError::MalformedToken);
  }
  let (nonce24, ct_and_tag) = body.split_at(NONCE_LEN);

  let aad = PreAuthenticationEncoding::parse(&[HEADER, nonce24, &footer]);
  let aead = XChaCha20Poly1305::new_from_slice(key.as_ref())
    .map_err(|_| PasetoError::ConfigError("symmetric key must be 32 bytes".into()))?;
  let plaintext = aead
    .decrypt(
      XNonce::from_slice(nonce24),
      chacha20poly1305::aead::Payload {
        msg: ct_and_tag,
        aad: aad.as_ref(),
      },
    )
    .map_err(|_| PasetoError::CryptoFailure)?;

  Ok(DecryptedLocal { plaintext, footer })
}
