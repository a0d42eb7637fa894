use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// subject issued by the identity provider
    pub sub: String,
    /// expiry time
    #[serde(with = "jwt_numeric_date")]
    pub exp: OffsetDateTime,
    /// group memberships, one per staff role
    #[serde(rename = "cognito:groups", alias = "groups", default)]
    pub groups: Vec<String>,
}

/// Checks bearer tokens minted by the external identity provider.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .field("iss", &self.validation.iss)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(
        key: DecodingKey,
        algorithm: Algorithm,
        issuer: Option<&str>,
        audience: Option<&str>,
    ) -> Self {
        let mut validation = Validation::new(algorithm);
        let mut required = vec!["exp"];
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
            required.push("iss");
        }
        match audience {
            Some(audience) => {
                validation.set_audience(&[audience]);
                required.push("aud");
            }
            None => validation.validate_aud = false,
        }
        // configured claims must be present, not just match when sent
        validation.set_required_spec_claims(&required);
        Self { key, validation }
    }

    pub fn from_rsa_pem(
        pem: &[u8],
        issuer: Option<&str>,
        audience: Option<&str>,
    ) -> crate::error::Result<Self> {
        let key = DecodingKey::from_rsa_pem(pem)?;
        Ok(Self::new(key, Algorithm::RS256, issuer, audience))
    }

    pub fn from_secret(secret: &[u8], issuer: Option<&str>, audience: Option<&str>) -> Self {
        Self::new(
            DecodingKey::from_secret(secret),
            Algorithm::HS256,
            issuer,
            audience,
        )
    }

    pub fn verify(&self, token: &str) -> crate::error::Result<TokenClaims> {
        let decoded = jsonwebtoken::decode::<TokenClaims>(token, &self.key, &self.validation)?;
        Ok(decoded.claims)
    }
}

#[cfg(test)]
pub(crate) fn encode_token<T: Serialize>(claims: &T, secret: &[u8]) -> String {
    let header = jsonwebtoken::Header::new(Algorithm::HS256);
    jsonwebtoken::encode(
        &header,
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret),
    )
    .unwrap()
}

mod jwt_numeric_date {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    /// Serializes an OffsetDateTime to a Unix timestamp (seconds since 1970/1/1T00:00:00T)
    pub fn serialize<S>(date: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let timestamp = date.unix_timestamp();
        serializer.serialize_i64(timestamp)
    }

    /// Attempts to deserialize an i64 and use as a Unix timestamp
    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        OffsetDateTime::from_unix_timestamp(i64::deserialize(deserializer)?)
            .map_err(|_| serde::de::Error::custom("invalid Unix timestamp value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    const SECRET: &[u8] = b"leisure-centre-test-secret";

    fn claims(exp: OffsetDateTime, groups: &[&str]) -> TokenClaims {
        TokenClaims {
            sub: "b7c1d2".to_string(),
            exp,
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_verify_token() {
        let verifier = TokenVerifier::from_secret(SECRET, None, None);
        let token = encode_token(
            &claims(OffsetDateTime::now_utc() + Duration::hours(1), &["Manager"]),
            SECRET,
        );
        let decoded = verifier.verify(&token).unwrap();
        assert_eq!(decoded.sub, "b7c1d2");
        assert_eq!(decoded.groups, vec!["Manager".to_string()]);
    }

    #[test]
    fn test_reject_bad_tokens() {
        let verifier = TokenVerifier::from_secret(SECRET, None, None);
        let expired = encode_token(
            &claims(OffsetDateTime::now_utc() - Duration::hours(2), &["Manager"]),
            SECRET,
        );
        assert!(verifier.verify(&expired).is_err());
        let forged = encode_token(
            &claims(OffsetDateTime::now_utc() + Duration::hours(1), &["Manager"]),
            b"another-secret",
        );
        assert!(verifier.verify(&forged).is_err());
        assert!(verifier.verify("not.a.token").is_err());
    }

    #[test]
    fn test_issuer_is_checked_when_configured() {
        let verifier = TokenVerifier::from_secret(SECRET, Some("https://idp.example"), None);
        let token = encode_token(
            &claims(OffsetDateTime::now_utc() + Duration::hours(1), &[]),
            SECRET,
        );
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_audience_is_required_when_configured() {
        let verifier =
            TokenVerifier::from_secret(SECRET, Some("https://idp.example"), Some("lcms-client"));
        let exp = (OffsetDateTime::now_utc() + Duration::hours(1)).unix_timestamp();
        let pinned = encode_token(
            &serde_json::json!({
                "sub": "b7c1d2",
                "exp": exp,
                "groups": ["Manager"],
                "iss": "https://idp.example",
                "aud": "lcms-client",
            }),
            SECRET,
        );
        assert_eq!(verifier.verify(&pinned).unwrap().groups, vec!["Manager"]);

        for claims in [
            serde_json::json!({"sub": "b7c1d2", "exp": exp, "groups": ["Manager"]}),
            serde_json::json!({
                "sub": "b7c1d2",
                "exp": exp,
                "groups": ["Manager"],
                "iss": "https://idp.example",
            }),
            serde_json::json!({
                "sub": "b7c1d2",
                "exp": exp,
                "groups": ["Manager"],
                "iss": "https://idp.example",
                "aud": "another-client",
            }),
        ] {
            let token = encode_token(&claims, SECRET);
            assert!(verifier.verify(&token).is_err(), "{claims} should be rejected");
        }
    }

    #[test]
    fn test_groups_claim_aliases() {
        let raw = r#"{"sub":"x","exp":1,"groups":["StaffMember"]}"#;
        let claims: TokenClaims = serde_json::from_str(raw).unwrap();
        assert_eq!(claims.groups, vec!["StaffMember".to_string()]);
        let raw = r#"{"sub":"x","exp":1}"#;
        let claims: TokenClaims = serde_json::from_str(raw).unwrap();
        assert!(claims.groups.is_empty());
    }
}
