//! Settings actions
//!
//! Only applied while a user is signed in.

use kwiz_domain::{ParentalControls, UserPreferences};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    UpdateUserPreferences(UserPreferences),
    UpdateParentalControls(ParentalControls),
}
