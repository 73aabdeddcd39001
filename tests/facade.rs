//! Claim-facade scenarios, mirroring the `create`/`parse` cases in the
//! original implementation's own test suite.
mod facade_scenarios {
  use anyhow::Result;
  use paseto2::claims::{create, parse, SigningKeyMaterial, VerifyingKeyMaterial};
  use paseto2::key::{Ed25519PublicKey, Ed25519SecretKey, Key, SymmetricKey};
  use paseto2::PasetoError;
  use serde_json::{json, Map};

  fn private_key() -> Result<Ed25519SecretKey> {
    Ok(Key::try_from(
      "b4cbfb43df4ce210727d953e4a713307fa19bb7d9f85041438d9e11b942a37741eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2",
    )?)
  }

  fn public_key() -> Result<Ed25519PublicKey> {
    Ok(Key::try_from(
      "1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2",
    )?)
  }

  fn nested_claims() -> Map<String, serde_json::Value> {
    let mut claims = Map::new();
    claims.insert("claim1".into(), json!(true));
    claims.insert("claim2".into(), json!(999));
    claims.insert("claim3".into(), json!({"nested": "this is a string", "array": [1, 2, 3]}));
    claims.insert("claim4".into(), json!("string2"));
    claims
  }

  #[test]
  fn create_then_parse_local_round_trips_nested_claims() -> Result<()> {
    let key = SymmetricKey::try_new_random()?;
    let token = create(SigningKeyMaterial::Local(&key), "local", nested_claims(), b"", None)?;
    assert!(token.starts_with(b"v2.local."));

    let parsed = parse(VerifyingKeyMaterial::Local(&key), "local", &token, true, &[])?;
    assert_eq!(parsed.message, nested_claims());
    Ok(())
  }

  #[test]
  fn create_then_parse_public_round_trips_nested_claims() -> Result<()> {
    let token = create(
      SigningKeyMaterial::Public(&private_key()?),
      "public",
      nested_claims(),
      b"",
      None,
    )?;
    assert!(token.starts_with(b"v2.public."));

    let parsed = parse(VerifyingKeyMaterial::Public(&public_key()?), "public", &token, true, &[])?;
    assert_eq!(parsed.message, nested_claims());
    Ok(())
  }

  #[test]
  fn future_exp_parses_successfully() -> Result<()> {
    let mut claims = Map::new();
    claims.insert("my claims".into(), json!([1, 2, 3]));
    let token = create(SigningKeyMaterial::Public(&private_key()?), "public", claims, b"", Some(300))?;
    parse(VerifyingKeyMaterial::Public(&public_key()?), "public", &token, true, &[])?;
    Ok(())
  }

  #[test]
  fn past_exp_is_token_expired() -> Result<()> {
    let mut claims = Map::new();
    claims.insert("my claims".into(), json!([1, 2, 3]));
    let token = create(
      SigningKeyMaterial::Public(&private_key()?),
      "public",
      claims,
      b"",
      Some(-300),
    )?;
    let err = parse(VerifyingKeyMaterial::Public(&public_key()?), "public", &token, true, &[]).unwrap_err();
    assert!(matches!(err, PasetoError::TokenExpired));
    Ok(())
  }

  #[test]
  fn validate_false_skips_expiry() -> Result<()> {
    let mut claims = Map::new();
    claims.insert("my claims".into(), json!([1, 2, 3]));
    let token = create(
      SigningKeyMaterial::Public(&private_key()?),
      "public",
      claims,
      b"",
      Some(-300),
    )?;
    parse(VerifyingKeyMaterial::Public(&public_key()?), "public", &token, false, &[])?;
    Ok(())
  }

  #[test]
  fn required_claims_enforced_even_when_validate_is_false() -> Result<()> {
    let mut claims = Map::new();
    claims.insert("my claims".into(), json!([1, 2, 3]));
    let token = create(
      SigningKeyMaterial::Public(&private_key()?),
      "public",
      claims,
      b"",
      Some(-300),
    )?;

    let parsed = parse(
      VerifyingKeyMaterial::Public(&public_key()?),
      "public",
      &token,
      false,
      &["exp", "my claims"],
    )?;
    assert!(parsed.message.contains_key("exp"));
    assert!(parsed.message.contains_key("my claims"));

    let err = parse(
      VerifyingKeyMaterial::Public(&public_key()?),
      "public",
      &token,
      false,
      &["exp", "missing"],
    )
    .unwrap_err();
    assert!(matches!(err, PasetoError::ValidationError(_)));
    Ok(())
  }

  #[test]
  fn footer_as_json_object_round_trips() -> Result<()> {
    let key = SymmetricKey::try_new_random()?;
    let footer = serde_json::to_vec(&json!({"footer field": false}))?;
    let token = create(SigningKeyMaterial::Local(&key), "local", nested_claims(), &footer, None)?;
    let parsed = parse(VerifyingKeyMaterial::Local(&key), "local", &token, true, &[])?;
    assert_eq!(parsed.footer, Some(json!({"footer field": false})));
    assert_eq!(parsed.raw_footer, footer);
    Ok(())
  }
}
