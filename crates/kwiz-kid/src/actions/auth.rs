//! Authentication actions

use kwiz_domain::{AppError, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Request sign in (handled by AuthMiddleware)
    SignIn { email: String, password: String },
    /// Request account creation (handled by AuthMiddleware)
    SignUp {
        email: String,
        password: String,
        name: String,
    },
    SignOut,
    /// Auth collaborator returned a user
    AuthenticationSucceeded(User),
    /// Auth collaborator failed
    AuthenticationFailed(AppError),
}

impl AuthAction {
    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::SignIn {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn sign_up(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::SignUp {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}
