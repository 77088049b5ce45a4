use crate::actions::SettingsAction;
use crate::state::AppState;

/// Settings reducer - a no-op while nobody is signed in
pub fn reduce_settings(mut state: AppState, action: &SettingsAction) -> AppState {
    let Some(user) = state.user.as_mut() else {
        log::debug!("Ignoring {:?}: no user signed in", action);
        return state;
    };

    match action {
        SettingsAction::UpdateUserPreferences(preferences) => {
            user.preferences = preferences.clone();
        }
        SettingsAction::UpdateParentalControls(controls) => {
            user.preferences.parental_controls = controls.clone();
        }
    }
    state
}
