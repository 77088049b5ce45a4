use crate::actions::CategoryAction;
use crate::state::AppState;

pub fn reduce_category(mut state: AppState, action: &CategoryAction) -> AppState {
    match action {
        CategoryAction::LoadCategories => {
            state.is_loading = true;
            state.error_message = None;
        }
        CategoryAction::CategoriesLoaded(categories) => {
            state.categories = categories.clone();
            state.is_loading = false;
        }
        CategoryAction::CategoriesLoadFailed(error) => {
            state.is_loading = false;
            state.error_message = Some(error.to_string());
        }
    }
    state
}
