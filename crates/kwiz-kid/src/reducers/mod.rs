//! Reducers
//!
//! Pure functions from `(state, action)` to the next state. No I/O happens
//! here; side effects belong to middleware.

pub mod app_reducer;
pub mod auth_reducer;
pub mod category_reducer;
pub mod lifecycle_reducer;
pub mod navigation_reducer;
pub mod quiz_reducer;
pub mod settings_reducer;
pub mod subscription_reducer;
pub mod ui_reducer;

pub use app_reducer::reduce;
