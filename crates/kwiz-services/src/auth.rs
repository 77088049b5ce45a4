//! Authentication collaborator

use crate::safety;
use async_trait::async_trait;
use kwiz_domain::{AppError, User};
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Signs users in and out
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError>;

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User, AppError>;

    async fn sign_out(&self) -> Result<(), AppError>;

    /// The user of the current session, if any
    async fn current_user(&self) -> Result<Option<User>, AppError>;
}

/// Local auth that accepts any well-formed credentials
///
/// Users get a fresh `mock_user_<uuid>` id and the default age of 8.
/// Unkind words in a chosen display name are masked.
#[derive(Debug, Default)]
pub struct MockAuthService {
    current: Mutex<Option<User>>,
}

const DEFAULT_AGE: u32 = 8;

impl MockAuthService {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(email: &str, password: &str) -> Result<(), AppError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::Authentication(
                "Please enter a valid email address".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(AppError::Authentication(
                "Please enter your password".to_string(),
            ));
        }
        Ok(())
    }

    fn start_session(&self, name: &str) -> User {
        let user = User::new(format!("mock_user_{}", Uuid::new_v4()), name, DEFAULT_AGE);
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        user
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        Self::validate(email, password)?;
        log::debug!("MockAuthService: signing in {}", email);
        Ok(self.start_session("Test User"))
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User, AppError> {
        Self::validate(email, password)?;
        if name.trim().is_empty() {
            return Err(AppError::Authentication("Please enter a name".to_string()));
        }
        log::debug!("MockAuthService: signing up {}", email);
        Ok(self.start_session(&safety::filter_content(name.trim())))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, AppError> {
        Ok(self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
