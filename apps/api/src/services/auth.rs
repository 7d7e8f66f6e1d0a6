//! Authentication service
//!
//! Provides user registration with Argon2id password hashing, login with
//! JWT access token generation, and token verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{ApiError, ApiResult};
use crate::models::{AuthTokens, Claims, User};
use crate::repositories::UserRepository;

/// Authentication service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token TTL in seconds (default: 24 hours)
    pub access_token_ttl_secs: i64,
    /// JWT issuer
    pub issuer: String,
}

impl AuthConfig {
    /// Create a new AuthConfig with the default TTL
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            access_token_ttl_secs: 24 * 3600,
            issuer: "watchdue".to_string(),
        }
    }

    /// Create AuthConfig from an expiry string (e.g. "15m", "24h", "7d")
    pub fn with_expiry_string(jwt_secret: String, access_expiry: &str) -> Self {
        Self {
            jwt_secret,
            access_token_ttl_secs: parse_duration_string(access_expiry).unwrap_or(24 * 3600),
            issuer: "watchdue".to_string(),
        }
    }
}

/// Parse duration strings like "15m", "7d", "24h" to seconds
fn parse_duration_string(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Split on the last char's boundary; the unit may be multi-byte garbage
    let (unit_idx, unit) = s.char_indices().last()?;
    let num: i64 = s[..unit_idx].parse().ok()?;

    match unit {
        's' => Some(num),
        'm' => Some(num * 60),
        'h' => Some(num * 3600),
        'd' => Some(num * 24 * 3600),
        'w' => Some(num * 7 * 24 * 3600),
        _ => None,
    }
}

/// Authentication service providing registration, login, and token handling
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    config: AuthConfig,
    argon2: Argon2<'static>,
    /// Pre-computed dummy hash for timing attack prevention.
    /// We verify against this hash when a user is not found to ensure
    /// consistent response times regardless of whether the email exists.
    dummy_password_hash: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(users: UserRepository, config: AuthConfig) -> Self {
        let argon2 = Argon2::default();

        let dummy_salt = SaltString::generate(&mut OsRng);
        let dummy_password_hash = argon2
            .hash_password(b"dummy_password_for_timing_attack_prevention", &dummy_salt)
            .map(|h| h.to_string())
            .unwrap_or_default();

        Self {
            users,
            config,
            argon2,
            dummy_password_hash,
        }
    }

    /// Register a new user account
    ///
    /// # Errors
    /// - `ApiError::Conflict` if the email already exists
    /// - `ApiError::ValidationError` if the email or password is invalid
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> ApiResult<User> {
        if !is_valid_email(email) {
            return Err(ApiError::ValidationError(
                "invalid email format".to_string(),
            ));
        }

        if password.len() < 8 {
            return Err(ApiError::ValidationError(
                "password must be at least 8 characters".to_string(),
            ));
        }

        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(ApiError::ValidationError(
                "display name cannot be empty".to_string(),
            ));
        }

        if self.users.email_exists(email).await? {
            return Err(ApiError::conflict("user", email));
        }

        let password_hash = self.hash_password(password)?;

        let user = self
            .users
            .create(email, &password_hash, display_name)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    ApiError::conflict("user", email)
                }
                _ => ApiError::Database(e),
            })?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered successfully");

        Ok(user)
    }

    /// Authenticate a user by email and password
    ///
    /// # Errors
    /// `ApiError::Unauthorized` on bad credentials; the error does not reveal
    /// whether the email exists.
    pub async fn authenticate(&self, email: &str, password: &str) -> ApiResult<(User, AuthTokens)> {
        let user = self.users.find_by_email(email).await?;

        let user = match user {
            Some(user) => {
                if !self.verify_password(password, &user.password_hash) {
                    tracing::debug!(email = %email, "Login failed: wrong password");
                    return Err(ApiError::Unauthorized);
                }
                user
            }
            None => {
                // Burn the same verification time as the found-user path
                self.verify_password(password, &self.dummy_password_hash);
                tracing::debug!(email = %email, "Login failed: unknown email");
                return Err(ApiError::Unauthorized);
            }
        };

        let tokens = self.create_tokens(&user)?;

        tracing::info!(user_id = %user.id, "User authenticated");

        Ok((user, tokens))
    }

    /// Issue an access token for a user
    pub fn create_tokens(&self, user: &User) -> ApiResult<AuthTokens> {
        let now = Utc::now();
        let ttl = self.config.access_token_ttl_secs;

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )?;

        Ok(AuthTokens {
            access_token,
            token_type: "Bearer",
            expires_in: ttl,
        })
    }

    /// Verify an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> ApiResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| ApiError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }

    /// Hash a password with Argon2id
    pub fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Minimal email shape check: one `@` with text on both sides and a dot in
/// the domain part
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_string() {
        assert_eq!(parse_duration_string("30s"), Some(30));
        assert_eq!(parse_duration_string("15m"), Some(15 * 60));
        assert_eq!(parse_duration_string("24h"), Some(24 * 3600));
        assert_eq!(parse_duration_string("7d"), Some(7 * 24 * 3600));
        assert_eq!(parse_duration_string("2w"), Some(2 * 7 * 24 * 3600));
        assert_eq!(parse_duration_string(""), None);
        assert_eq!(parse_duration_string("abc"), None);
        assert_eq!(parse_duration_string("15x"), None);
        // Multi-byte trailing characters must not panic
        assert_eq!(parse_duration_string("24é"), None);
        assert_eq!(parse_duration_string("日"), None);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@nodot"));
        assert!(!is_valid_email("ana@.com"));
    }

    #[test]
    fn test_auth_config_expiry_parsing() {
        let config = AuthConfig::with_expiry_string("secret".to_string(), "15m");
        assert_eq!(config.access_token_ttl_secs, 15 * 60);

        let config = AuthConfig::with_expiry_string("secret".to_string(), "junk");
        assert_eq!(config.access_token_ttl_secs, 24 * 3600);
    }
}
