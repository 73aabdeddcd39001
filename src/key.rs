//! Strongly-sized, zeroizing key wrappers.
//!
//! A fixed-size byte array that zeroizes on drop and exposes `hex`-based
//! construction for test vectors, generalized to the three key shapes
//! this crate needs.
use std::convert::TryFrom;
use std::fmt;

use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::error::PasetoError;

/// A fixed-size, zeroize-on-drop byte buffer.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Key<const KEYSIZE: usize>([u8; KEYSIZE]);

impl<const KEYSIZE: usize> Key<KEYSIZE> {
  /// Generates `KEYSIZE` random bytes from the operating system CSPRNG.
  pub fn try_new_random() -> Result<Self, PasetoError> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; KEYSIZE];
    rng
      .fill(&mut buf)
      .map_err(|_| PasetoError::ConfigError("failed to source random bytes".into()))?;
    Ok(Self(buf))
  }
}

impl<const KEYSIZE: usize> Default for Key<KEYSIZE> {
  fn default() -> Self {
    Self([0u8; KEYSIZE])
  }
}

impl<const KEYSIZE: usize> AsRef<[u8]> for Key<KEYSIZE> {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl<const KEYSIZE: usize> From<[u8; KEYSIZE]> for Key<KEYSIZE> {
  fn from(key: [u8; KEYSIZE]) -> Self {
    Self(key)
  }
}

impl<const KEYSIZE: usize> From<&[u8; KEYSIZE]> for Key<KEYSIZE> {
  fn from(key: &[u8; KEYSIZE]) -> Self {
    Self(*key)
  }
}

impl<const KEYSIZE: usize> TryFrom<&[u8]> for Key<KEYSIZE> {
  type Error = PasetoError;

  fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
    if key.len() != KEYSIZE {
      return Err(PasetoError::ConfigError(format!(
        "expected a {}-byte key, got {}",
        KEYSIZE,
        key.len()
      )));
    }
    let mut me = Self::default();
    me.0.copy_from_slice(key);
    Ok(me)
  }
}

impl<const KEYSIZE: usize> TryFrom<&str> for Key<KEYSIZE> {
  type Error = PasetoError;

  /// Parses a hex-encoded key, for use with hex-formatted test vectors.
  fn try_from(value: &str) -> Result<Self, Self::Error> {
    let key = hex::decode(value).map_err(|e| PasetoError::ConfigError(e.to_string()))?;
    Self::try_from(key.as_slice())
  }
}

impl<const KEYSIZE: usize> fmt::Debug for Key<KEYSIZE> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Key<{KEYSIZE}>(REDACTED)")
  }
}

/// A 32-byte `v2.local` symmetric key.
pub type SymmetricKey = Key<32>;
/// A 64-byte Ed25519 secret key (32-byte seed ∥ 32-byte public key).
pub type Ed25519SecretKey = Key<64>;
/// A 32-byte Ed25519 public key.
pub type Ed25519PublicKey = Key<32>;

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn random_keys_have_expected_length() {
    let key = SymmetricKey::try_new_random().unwrap();
    assert_eq!(key.as_ref().len(), 32);
  }

  #[test]
  fn rejects_wrong_length_slice() {
    assert!(SymmetricKey::try_from(&b"too short"[..]).is_err());
  }

  #[test]
  fn debug_never_prints_key_material() {
    let key = SymmetricKey::from([0x42; 32]);
    assert!(!format!("{key:?}").contains("42"));
  }
}
