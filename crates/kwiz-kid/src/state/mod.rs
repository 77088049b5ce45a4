//! Application State Module

mod app;
mod screen;

pub use app::AppState;
pub use screen::{CurrentTab, Screen, ScreenKind};
