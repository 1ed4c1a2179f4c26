//! HS256 token signing and verification with a process-wide secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use classhub_core::config::AuthConfig;
use classhub_core::error::AppError;

use super::claims::Claims;
use super::error::{EncodingError, VerificationError};

/// Clock skew tolerated when checking `exp`, in seconds.
const LEEWAY_SECONDS: u64 = 5;

/// Signs and verifies identity tokens.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec. An empty secret is a configuration error.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::configuration("token secret must not be empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECONDS;
        // Posted claims are embedded verbatim, `aud` included.
        validation.validate_aud = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    /// Creates a codec from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        Self::new(
            &config.jwt_secret,
            Duration::minutes(config.token_ttl_minutes as i64),
        )
    }

    /// Token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs `payload`, stamping `iat` and `exp = iat + ttl`.
    ///
    /// The payload must carry a non-empty string `email`; other fields are
    /// embedded as-is. Caller-supplied `iat`/`exp` are replaced.
    pub fn sign(&self, payload: &Map<String, Value>) -> Result<String, EncodingError> {
        let email = payload
            .get("email")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(EncodingError::MissingSubject)?
            .to_string();

        let mut extra = payload.clone();
        for reserved in ["email", "iat", "exp"] {
            extra.remove(reserved);
        }

        let now = Utc::now();
        let claims = Claims {
            email,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            extra,
        };
        self.issue(&claims)
    }

    /// Signs a token for a bare subject.
    pub fn sign_subject(&self, email: &str) -> Result<String, EncodingError> {
        let mut payload = Map::new();
        payload.insert("email".into(), Value::String(email.to_string()));
        self.sign(&payload)
    }

    /// Encodes `claims` exactly as given.
    pub fn issue(&self, claims: &Claims) -> Result<String, EncodingError> {
        if claims.email.trim().is_empty() {
            return Err(EncodingError::MissingSubject);
        }
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }

    /// Checks signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| VerificationError::from(&e))
    }
}
