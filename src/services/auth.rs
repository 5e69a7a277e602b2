use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::Claims;

pub struct AuthService;

impl AuthService {
    /// Mint an HS256 access token identifying `username` as a teacher.
    pub fn generate_access_token(
        username: &str,
        secret: &str,
        ttl_seconds: u64,
    ) -> anyhow::Result<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp: now + ttl_seconds as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Validate signature and expiry, returning the teacher username.
    pub fn decode_access_token(token: &str, secret: &str) -> anyhow::Result<String> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_yields_username() {
        let token = AuthService::generate_access_token("t_jones", "secret", 900).unwrap();
        let username = AuthService::decode_access_token(&token, "secret").unwrap();
        assert_eq!(username, "t_jones");
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = AuthService::generate_access_token("t_jones", "secret", 900).unwrap();
        assert!(AuthService::decode_access_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "t_jones".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(AuthService::decode_access_token(&token, "secret").is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(AuthService::decode_access_token("not-a-jwt", "secret").is_err());
    }
}
