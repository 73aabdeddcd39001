//! A type-driven, ergonomic implementation of the core of [PASETO:
//! Platform-Agnostic Security Tokens](https://github.com/paseto-standard/paseto-spec),
//! version 2 only: `v2.local` (symmetric authenticated encryption) and
//! `v2.public` (Ed25519 signatures), plus a small claim facade for expiry
//! and required-claim enforcement.
//!
//! > "Paseto is everything you love about JOSE (JWT, JWE, JWS) without any
//! of the [many design deficits that plague the JOSE standards](https://paragonie.com/blog/2017/03/jwt-json-web-tokens-is-bad-standard-that-everyone-should-avoid)."
//! > -- [PASETO Specification](https://github.com/paseto-standard/paseto-spec)
//!
//! # Usage
//!
//! ```
//! use paseto2::{claims, key::SymmetricKey};
//! use serde_json::json;
//!
//! let key = SymmetricKey::try_new_random()?;
//! let mut payload = serde_json::Map::new();
//! payload.insert("sub".into(), json!("Get schwifty"));
//!
//! let token = claims::create(
//!   claims::SigningKeyMaterial::Local(&key),
//!   "local",
//!   payload,
//!   b"",
//!   Some(3600),
//! )?;
//!
//! let parsed = claims::parse(
//!   claims::VerifyingKeyMaterial::Local(&key),
//!   "local",
//!   &token,
//!   true,
//!   &[],
//! )?;
//! assert_eq!(parsed.message["sub"], "Get schwifty");
//! # Ok::<(), paseto2::error::PasetoError>(())
//! ```
//!
//! ## Lower-level engines
//!
//! The claim facade dispatches to [`local`] and [`public`] directly, which
//! are available for callers who want to authenticate bytes that aren't a
//! JSON claims object:
//!
//! ```
//! use paseto2::{key::SymmetricKey, local};
//!
//! let key = SymmetricKey::try_new_random()?;
//! let token = local::encrypt(&key, b"hello world", b"a footer")?;
//! let decrypted = local::decrypt(&key, &token)?;
//! assert_eq!(decrypted.plaintext, b"hello world");
//! # Ok::<(), paseto2::error::PasetoError>(())
//! ```
pub mod base64url;
pub mod claims;
pub mod error;
pub mod key;
pub mod local;
mod nonce;
pub mod pae;
pub mod public;

#[cfg(any(test, feature = "test-seam"))]
pub use nonce::{clear, set};

pub use claims::{create, parse, ParsedClaims, Purpose, SigningKeyMaterial, VerifyingKeyMaterial};
pub use error::PasetoError;
pub use key::{Ed25519PublicKey, Ed25519SecretKey, Key, SymmetricKey};
pub use local::{decrypt as local_decrypt, encrypt as local_encrypt, DecryptedLocal};
pub use public::{sign as public_sign, verify as public_verify, VerifiedPublic};
