use crate::actions::UiAction;
use crate::state::AppState;

/// UI reducer - loading flag and error banner
pub fn reduce_ui(mut state: AppState, action: &UiAction) -> AppState {
    match action {
        UiAction::SetLoading(loading) => {
            state.is_loading = *loading;
        }
        UiAction::SetError(error) => {
            state.error_message = error.as_ref().map(ToString::to_string);
            state.is_loading = false;
        }
        UiAction::ClearError => {
            state.error_message = None;
            state.is_loading = false;
        }
    }
    state
}
