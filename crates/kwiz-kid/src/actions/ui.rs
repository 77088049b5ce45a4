//! Generic UI state actions

use kwiz_domain::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SetLoading(bool),
    /// Show an error banner, or clear it with `None`
    SetError(Option<AppError>),
    ClearError,
}
