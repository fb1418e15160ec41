//! Mock authentication service for login, registration, and token management
//!
//! There is no backend yet: every call waits for a configured delay to mimic
//! the network and then answers from the injected [`MockUserDatabase`].
//! Tokens are opaque strings with a fixed prefix and carry no signature.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use crate::services::user_db::MockUserDatabase;
use shared::models::{AuthResponse, LoginCredentials, RegisterInput, User};

/// Length of the random tail appended to every token
const TOKEN_SUFFIX_LEN: usize = 9;

/// Mock authentication service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<MockUserDatabase>,
    latency: Duration,
    token_prefix: String,
}

impl AuthService {
    /// Create a new AuthService over `users`
    pub fn new(users: Arc<MockUserDatabase>, config: &AuthConfig) -> Self {
        Self {
            users,
            latency: Duration::from_millis(config.latency_ms),
            token_prefix: config.token_prefix.clone(),
        }
    }

    /// Authenticate with email and password
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<AuthResponse> {
        self.simulate_latency().await;

        let record = self
            .users
            .find_by_email(&credentials.email)
            .await
            .ok_or(AppError::UserNotFound)?;

        if record.password != credentials.password {
            tracing::debug!(email = %credentials.email, "Rejected login with wrong password");
            return Err(AppError::InvalidPassword);
        }

        tracing::info!(user_id = %record.user.id, "User logged in");

        Ok(AuthResponse {
            token: self.generate_token(),
            user: record.user,
        })
    }

    /// Create an account and log it in
    pub async fn register(&self, input: RegisterInput) -> AppResult<AuthResponse> {
        self.simulate_latency().await;

        input.validate()?;

        if self.users.contains(&input.email).await {
            return Err(AppError::UserAlreadyExists(input.email.trim().to_lowercase()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email.trim().to_string(),
            location: input.location,
            phone: input.phone,
            farm_count: 0,
            total_area: Decimal::ZERO,
        };

        // The insert re-checks under the write guard
        let user = self.users.insert(input.password, user).await?;

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(AuthResponse {
            token: self.generate_token(),
            user,
        })
    }

    /// Syntactic check only: the token carries the mock prefix
    pub async fn validate_token(&self, token: &str) -> bool {
        self.simulate_latency().await;
        self.has_prefix(token)
    }

    /// Issue a new token for a valid one. The new token is not tied to the
    /// identity behind the old one.
    pub async fn refresh_token(&self, token: &str) -> AppResult<String> {
        if !self.validate_token(token).await {
            return Err(AppError::InvalidToken);
        }
        Ok(self.generate_token())
    }

    /// Profile behind `token`.
    ///
    /// Tokens do not encode an identity, so any valid token resolves to the
    /// seeded demo user.
    pub async fn get_current_user(&self, token: &str) -> AppResult<User> {
        if !self.validate_token(token).await {
            return Err(AppError::InvalidToken);
        }
        Ok(User::demo())
    }

    /// Nothing to revoke; only waits out the simulated round trip
    pub async fn logout(&self) {
        self.simulate_latency().await;
        tracing::info!("User logged out");
    }

    fn has_prefix(&self, token: &str) -> bool {
        token.starts_with(&self.token_prefix)
    }

    /// `<prefix><unix millis>_<random>`
    fn generate_token(&self) -> String {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(TOKEN_SUFFIX_LEN)
            .collect();
        format!(
            "{}{}_{}",
            self.token_prefix,
            Utc::now().timestamp_millis(),
            suffix
        )
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
