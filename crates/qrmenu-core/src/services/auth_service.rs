// ============================================================================
// QR Menu Core - Authentication Service
// File: crates/qrmenu-core/src/services/auth_service.rs
// ============================================================================
//! Registration, login, logout and session resolution.
//!
//! A session is only ever identified by the digest of the opaque cookie token;
//! `current_user` maps that digest to exactly one user or to nothing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use qrmenu_security::{generate_session_token, hash_session_token, PasswordService, Session};
use qrmenu_shared::constants::MAX_PASSWORD_LENGTH;
use qrmenu_shared::utils::mask_email;
use tracing::{error, info, warn};

use crate::domain::User;
use crate::error::DomainError;
use crate::repositories::{SessionRepository, UserRepository};

/// Registration payload after presence checks.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    /// Raw token for the cookie. Only its digest is stored.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    passwords: PasswordService,
    session_ttl_secs: i64,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        passwords: PasswordService,
        session_ttl_secs: i64,
    ) -> Self {
        Self {
            users,
            sessions,
            passwords,
            session_ttl_secs,
        }
    }

    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_secs
    }

    /// Register a new restaurant owner
    pub async fn register(&self, input: RegisterInput) -> Result<User, DomainError> {
        let masked = mask_email(&input.email);
        info!("Registration attempt for email: {}", masked);

        // Only an upper bound is enforced.
        if input.password.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Password must be at most {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }

        // Cheap early exit; the insert below still enforces uniqueness.
        if self.users.find_by_email(input.email.trim()).await?.is_some() {
            warn!("Registration failed: email already exists: {}", masked);
            return Err(DomainError::EmailAlreadyExists(input.email));
        }

        let password_hash = self.passwords.hash(&input.password)?;
        let user = User::new(&input.email, password_hash, input.name)?;
        let created = self.users.create(&user).await?;

        info!("Registration successful for: {}", masked);
        Ok(created)
    }

    /// Login with email and password, opening a new session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        let masked = mask_email(email);
        info!("Login attempt for email: {}", masked);

        let user = self.users.find_by_email(email.trim()).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", masked);
            DomainError::InvalidCredentials
        })?;

        let password_valid = self
            .passwords
            .verify(password, &user.password_hash)
            .unwrap_or_else(|e| {
                error!("Stored password hash for user {} is unreadable: {}", user.id, e);
                false
            });
        if !password_valid {
            warn!("Login failed: invalid password for: {}", masked);
            return Err(DomainError::InvalidCredentials);
        }

        if self.passwords.needs_rehash(&user.password_hash) {
            self.upgrade_hash(&user, password).await;
        }

        let token = generate_session_token();
        let session = Session::new(&token, user.id, self.session_ttl_secs);
        self.sessions.create(&session).await?;

        info!("Login successful for: {}", masked);
        Ok(LoginResult {
            user,
            token,
            expires_at: session.expires_at,
        })
    }

    // Failure here must not fail the login.
    async fn upgrade_hash(&self, user: &User, password: &str) {
        let rehashed = match self.passwords.hash(password) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to rehash password for user {}: {}", user.id, e);
                return;
            }
        };
        match self.users.update_password_hash(&user.id, &rehashed).await {
            Ok(()) => info!("Upgraded password hash parameters for user {}", user.id),
            Err(e) => error!("Failed to store upgraded hash for user {}: {}", user.id, e),
        }
    }

    /// Ends the session identified by `token`. Unknown tokens are a no-op.
    pub async fn logout(&self, token: &str) -> Result<(), DomainError> {
        self.sessions
            .delete_by_token_hash(&hash_session_token(token))
            .await
    }

    /// Resolves a cookie token to its user.
    ///
    /// `Ok(None)` for unknown or expired sessions; `UserNotFound` when the
    /// session is valid but its user no longer exists.
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, DomainError> {
        let token_hash = hash_session_token(token);
        let Some(session) = self.sessions.find_by_token_hash(&token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            if let Err(e) = self.sessions.delete_by_token_hash(&token_hash).await {
                warn!("Failed to remove expired session: {}", e);
            }
            return Ok(None);
        }

        self.users
            .find_by_id(&session.user_id)
            .await?
            .map(Some)
            .ok_or(DomainError::UserNotFound)
    }

    pub async fn purge_expired_sessions(&self) -> Result<u64, DomainError> {
        let removed = self.sessions.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!("Purged {} expired sessions", removed);
        }
        Ok(removed)
    }
}
