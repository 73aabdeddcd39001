//! Pre-Authentication Encoding: a deterministic, length-prefixed
//! concatenation binding header/footer context into the AEAD's associated
//! data or into the signature's message.
//!
//! Refactored from the PAE construction in the PASETO specification; see
//! <https://github.com/paseto-standard/paseto-spec/blob/master/docs/02-Implementation-Guide/01-PASETO-Alg-Lucidity.md>.
use std::ops::Deref;

pub struct PreAuthenticationEncoding(Vec<u8>);

impl PreAuthenticationEncoding {
  /// `pieces` — the ordered byte strings to concatenate and length-prefix.
  pub fn parse(pieces: &[&[u8]]) -> Self {
    let prefixed = pieces.iter().fold(Self::le64(pieces.len() as u64), |mut acc, piece| {
      acc.extend(Self::le64(piece.len() as u64));
      acc.extend(piece.iter());
      acc
    });
    Self(prefixed)
  }

  /// Little-endian u64 encoding of `to_encode` with the most significant
  /// bit of the final byte cleared, per the PAE spec.
  fn le64(mut to_encode: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(8);
    for _ in 0..8 {
      out.push((to_encode & 0xff) as u8);
      to_encode >>= 8;
    }
    out[7] &= 0x7f;
    out
  }
}

impl Deref for PreAuthenticationEncoding {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<[u8]> for PreAuthenticationEncoding {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}
