use crate::actions::Action;
use crate::reducers::{
    auth_reducer, category_reducer, lifecycle_reducer, navigation_reducer, quiz_reducer,
    settings_reducer, subscription_reducer, ui_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes each concern to its sub-reducer
pub fn reduce(state: AppState, action: &Action) -> AppState {
    match action {
        Action::Lifecycle(action) => lifecycle_reducer::reduce_lifecycle(state, action),
        Action::Auth(action) => auth_reducer::reduce_auth(state, action),
        Action::Category(action) => category_reducer::reduce_category(state, action),
        Action::Quiz(action) => quiz_reducer::reduce_quiz(state, action),
        Action::Navigation(action) => navigation_reducer::reduce_navigation(state, action),
        Action::Subscription(action) => subscription_reducer::reduce_subscription(state, action),
        Action::Ui(action) => ui_reducer::reduce_ui(state, action),
        Action::Settings(action) => settings_reducer::reduce_settings(state, action),
    }
}
