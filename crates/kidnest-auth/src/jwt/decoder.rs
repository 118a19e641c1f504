//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use kidnest_core::config::auth::AuthConfig;
use kidnest_core::error::AppError;

use super::claims::Claims;

/// Message returned for a token whose signature is valid but whose expiry
/// has passed. Deliberately distinct from [`INVALID_TOKEN`].
pub const TOKEN_EXPIRED: &str = "Token has expired";

/// Message returned for a token that cannot be parsed or whose signature
/// does not verify.
pub const INVALID_TOKEN: &str = "Invalid token";

/// Validates bearer tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning its claims.
    ///
    /// Fails with [`TOKEN_EXPIRED`] when the signature is valid but the
    /// expiry has passed, and [`INVALID_TOKEN`] for any parse or signature
    /// failure — including payload or expiry tampering.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication(TOKEN_EXPIRED)
                    }
                    _ => AppError::authentication(INVALID_TOKEN),
                }
            })?;

        Ok(token_data.claims)
    }
}
