//! The claim facade: JSON claims, `exp` expiry, and required-claim
//! enforcement, dispatching to [`crate::local`] or [`crate::public`].
//!
//! Claims are an open JSON object; `exp` is stamped and parsed with the
//! `time` crate's RFC 3339 support.
use serde_json::{Map, Value};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::error::PasetoError;
use crate::key::{Ed25519PublicKey, Ed25519SecretKey, SymmetricKey};
use crate::{local, public};

const EXP_CLAIM: &str = "exp";

/// Which engine a token is built for or parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
  Local,
  Public,
}

impl Purpose {
  fn parse(name: &str) -> Result<Self, PasetoError> {
    match name {
      "local" => Ok(Self::Local),
      "public" => Ok(Self::Public),
      other => Err(PasetoError::ConfigError(format!("unknown purpose {other:?}"))),
    }
  }
}

/// Either a symmetric key (for `Purpose::Local`) or an Ed25519 secret key
/// (for `Purpose::Public`), used by [`create`].
pub enum SigningKeyMaterial<'a> {
  Local(&'a SymmetricKey),
  Public(&'a Ed25519SecretKey),
}

/// Either a symmetric key or an Ed25519 public key, used by [`parse`].
pub enum VerifyingKeyMaterial<'a> {
  Local(&'a SymmetricKey),
  Public(&'a Ed25519PublicKey),
}

/// A successfully parsed and validated token.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedClaims {
  pub message: Map<String, Value>,
  pub footer: Option<Value>,
  pub raw_footer: Vec<u8>,
}

/// Builds a token from `claims`, stamping `exp` when `exp_seconds` is given,
/// and dispatching to the `local` or `public` engine per `key`.
///
/// `exp_seconds` may be negative, which produces an already-expired token —
/// useful for exercising [`parse`]'s expiry check.
pub fn create(
  key: SigningKeyMaterial<'_>,
  purpose: &str,
  mut claims: Map<String, Value>,
  footer: &[u8],
  exp_seconds: Option<i64>,
) -> Result<Vec<u8>, PasetoError> {
  let purpose = Purpose::parse(purpose)?;
  match (&key, purpose) {
    (SigningKeyMaterial::Local(_), Purpose::Local) | (SigningKeyMaterial::Public(_), Purpose::Public) => {}
    _ => return Err(PasetoError::ConfigError("key material does not match purpose".into())),
  }

  if let Some(offset) = exp_seconds {
    let exp = OffsetDateTime::now_utc() + Duration::seconds(offset);
    let stamped = exp
      .format(&Rfc3339)
      .map_err(|e| PasetoError::ValidationError(e.to_string()))?;
    claims.insert(EXP_CLAIM.to_string(), Value::String(stamped));
  }

  let message = serde_json::to_vec(&Value::Object(claims)).map_err(|e| PasetoError::ValidationError(e.to_string()))?;

  match key {
    SigningKeyMaterial::Local(sym) => local::encrypt(sym, &message, footer),
    SigningKeyMaterial::Public(secret) => public::sign(secret, &message, footer),
  }
}

/// Decrypts/verifies `token`, JSON-decodes its message and footer, and
/// enforces `required_claims` (always) and `exp` (when `validate`).
pub fn parse(
  key: VerifyingKeyMaterial<'_>,
  purpose: &str,
  token: &[u8],
  validate: bool,
  required_claims: &[&str],
) -> Result<ParsedClaims, PasetoError> {
  let purpose = Purpose::parse(purpose)?;
  match (&key, purpose) {
    (VerifyingKeyMaterial::Local(_), Purpose::Local) | (VerifyingKeyMaterial::Public(_), Purpose::Public) => {}
    _ => return Err(PasetoError::ConfigError("key material does not match purpose".into())),
  }

  let (raw_message, raw_footer) = match key {
    VerifyingKeyMaterial::Local(sym) => {
      let decrypted = local::decrypt(sym, token)?;
      (decrypted.plaintext, decrypted.footer)
    }
    VerifyingKeyMaterial::Public(public) => {
      let verified = public::verify(public, token)?;
      (verified.message, verified.footer)
    }
  };

  let message: Map<String, Value> = match serde_json::from_slice(&raw_message) {
    Ok(Value::Object(map)) => map,
    _ => return Err(PasetoError::ValidationError("message is not a JSON object".into())),
  };
  let footer = serde_json::from_slice(&raw_footer).ok();

  for name in required_claims {
    if !message.contains_key(*name) {
      return Err(PasetoError::ValidationError(format!("missing required claim {name:?}")));
    }
  }

  if validate {
    if let Some(raw_exp) = message.get(EXP_CLAIM) {
      let exp_str = raw_exp
        .as_str()
        .ok_or_else(|| PasetoError::ValidationError("exp claim is not a string".into()))?;
      let exp = OffsetDateTime::parse(exp_str, &Rfc3339).map_err(|e| PasetoError::ValidationError(e.to_string()))?;
      if OffsetDateTime::now_utc() > exp {
        return Err(PasetoError::TokenExpired);
      }
    }
  }

  Ok(ParsedClaims {
    message,
    footer,
    raw_footer,
  })
}
