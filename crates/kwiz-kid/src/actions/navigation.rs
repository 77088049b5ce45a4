//! Navigation actions

use crate::state::{CurrentTab, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    /// Jump to a screen
    NavigateTo(Screen),
    /// Back navigation; the view layer owns its back stack
    GoBack,
    SelectTab(CurrentTab),
}
