use crate::actions::AuthAction;
use crate::state::{AppState, Screen};

/// Auth reducer - handles sign in, sign up and sign out transitions
pub fn reduce_auth(mut state: AppState, action: &AuthAction) -> AppState {
    match action {
        AuthAction::SignIn { .. } | AuthAction::SignUp { .. } => {
            state.is_loading = true;
            state.error_message = None;
        }
        AuthAction::SignOut => {
            state.user = None;
            state.current_screen = Screen::Welcome;
        }
        AuthAction::AuthenticationSucceeded(user) => {
            log::debug!("Signed in as {}", user.id);
            state.user = Some(user.clone());
            state.is_loading = false;
            state.current_screen = Screen::CategorySelection;
        }
        AuthAction::AuthenticationFailed(error) => {
            state.is_loading = false;
            state.error_message = Some(error.to_string());
        }
    }
    state
}
