//! Test-only seam for injecting a fixed nonce into `v2.local` encryption.
//!
//! Production code never touches this module; it exists so the official
//! PASETO v2 interoperability vectors (which all use deterministic nonces)
//! can be reproduced byte for byte. Consulted only by [`crate::local::encrypt`].
//! A function-valued slot on the local engine whose default is the CSPRNG,
//! compiled out of production builds unless `test-seam` is enabled.
#![cfg(any(test, feature = "test-seam"))]

use std::sync::Mutex;

static FIXED_NONCE: Mutex<Option<[u8; 24]>> = Mutex::new(None);

/// Forces every subsequent `v2.local` encryption (on any thread) to use
/// `nonce` instead of a CSPRNG-sourced one, until [`clear`] is called.
///
/// Tests using this must serialize — there is one process-wide slot, and a
/// test racing another test's nonce would silently corrupt both.
pub fn set(nonce: [u8; 24]) {
  *FIXED_NONCE.lock().unwrap_or_else(|e| e.into_inner()) = Some(nonce);
}

/// Clears an override set with [`set`], reverting to the CSPRNG.
pub fn clear() {
  *FIXED_NONCE.lock().unwrap_or_else(|e| e.into_inner()) = None;
}

pub(crate) fn take_override() -> Option<[u8; 24]> {
  FIXED_NONCE.lock().unwrap_or_else(|e| e.into_inner()).as_ref().copied()
}
