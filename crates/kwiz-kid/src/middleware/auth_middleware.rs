//! Auth Middleware
//!
//! Turns sign-in, sign-up and sign-out requests into calls on the
//! [`AuthService`] collaborator. On launch it restores a session the
//! service still holds.

use crate::actions::{Action, AuthAction, LifecycleAction, UiAction};
use crate::effect::{Effect, Effects};
use crate::middleware::Middleware;
use crate::state::AppState;
use kwiz_services::AuthService;
use std::sync::Arc;

pub struct AuthMiddleware {
    auth: Arc<dyn AuthService>,
}

impl AuthMiddleware {
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }
}

fn authentication_failed(error: kwiz_domain::AppError) -> Action {
    AuthAction::AuthenticationFailed(error).into()
}

impl Middleware for AuthMiddleware {
    fn handle(&mut self, action: Action, _state: &AppState, effects: &mut Effects) -> Action {
        match &action {
            Action::Lifecycle(LifecycleAction::AppLaunched) => {
                let auth = Arc::clone(&self.auth);
                effects.push(Effect::maybe(
                    "restore_session",
                    async move {
                        let user = auth.current_user().await?;
                        Ok(user.map(|user| {
                            log::info!("AuthMiddleware: Restored session for {}", user.id);
                            AuthAction::AuthenticationSucceeded(user).into()
                        }))
                    },
                    authentication_failed,
                ));
            }
            Action::Auth(AuthAction::SignIn { email, password }) => {
                log::info!("AuthMiddleware: Signing in {}", email);
                let auth = Arc::clone(&self.auth);
                let (email, password) = (email.clone(), password.clone());
                effects.push(Effect::task(
                    "sign_in",
                    async move {
                        let user = auth.sign_in(&email, &password).await?;
                        Ok(AuthAction::AuthenticationSucceeded(user).into())
                    },
                    authentication_failed,
                ));
            }
            Action::Auth(AuthAction::SignUp {
                email,
                password,
                name,
            }) => {
                log::info!("AuthMiddleware: Signing up {}", email);
                let auth = Arc::clone(&self.auth);
                let (email, password, name) = (email.clone(), password.clone(), name.clone());
                effects.push(Effect::task(
                    "sign_up",
                    async move {
                        let user = auth.sign_up(&email, &password, &name).await?;
                        Ok(AuthAction::AuthenticationSucceeded(user).into())
                    },
                    authentication_failed,
                ));
            }
            Action::Auth(AuthAction::SignOut) => {
                let auth = Arc::clone(&self.auth);
                effects.push(Effect::fire(
                    "sign_out",
                    async move { auth.sign_out().await },
                    |e| UiAction::SetError(Some(e)).into(),
                ));
            }
            _ => {}
        }
        action
    }
}
