use crate::actions::NavigationAction;
use crate::state::AppState;

pub fn reduce_navigation(mut state: AppState, action: &NavigationAction) -> AppState {
    match action {
        NavigationAction::NavigateTo(screen) => {
            state.current_screen = screen.clone();
        }
        // No navigation history is kept
        NavigationAction::GoBack => {}
        NavigationAction::SelectTab(tab) => {
            state.selected_tab = *tab;
        }
    }
    state
}
