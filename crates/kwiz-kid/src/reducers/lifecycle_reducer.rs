use crate::actions::LifecycleAction;
use crate::state::{AppState, Screen};

/// Lifecycle reducer
///
/// Launch lands on the welcome screen; foreground and background only
/// trigger middleware work.
pub fn reduce_lifecycle(mut state: AppState, action: &LifecycleAction) -> AppState {
    match action {
        LifecycleAction::AppLaunched => {
            state.current_screen = Screen::Welcome;
            state.is_loading = false;
        }
        LifecycleAction::AppWillEnterForeground | LifecycleAction::AppDidEnterBackground => {}
    }
    state
}
