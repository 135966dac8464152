use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::types::error::AppError;
use crate::types::token::Claims;

/// Mints and verifies session tokens with the process-wide secret. Built once
/// at startup and shared read-only across requests.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl TokenIssuer {
    pub fn new(jwt: &JwtConfig) -> Self {
        TokenIssuer {
            encoding_key: EncodingKey::from_secret(jwt.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt.secret.as_bytes()),
            ttl_hours: jwt.ttl_hours,
        }
    }

    /// The caller is expected to have authenticated `user_id` already.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.ttl_hours)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Rejects a bad signature, a malformed token, and an elapsed expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    pub fn ttl_hours(&self) -> i64 {
        self.ttl_hours
    }
}

/// Best-effort read of a token's expiry claim, signature NOT checked. Only
/// for stamping blacklist records so they can be purged later.
pub fn decode_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .ok()
        .and_then(|data| DateTime::from_timestamp(data.claims.exp, 0))
}
