//! Category catalog actions

use kwiz_domain::{AppError, QuizCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    /// Request the catalog (handled by CategoryMiddleware)
    LoadCategories,
    CategoriesLoaded(Vec<QuizCategory>),
    CategoriesLoadFailed(AppError),
}
