//! Top-level screens and tabs

use kwiz_domain::{QuizCategory, QuizScore};
use serde::Serialize;
use strum::{Display, EnumIter};

/// The active top-level screen and the data it needs to render
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "screen", content = "payload", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    CategorySelection,
    /// Quiz for the selected category
    Quiz(QuizCategory),
    /// Results of a completed quiz
    Results(QuizScore),
}

/// Payload-free discriminant of [`Screen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ScreenKind {
    Welcome,
    CategorySelection,
    Quiz,
    Results,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Welcome => ScreenKind::Welcome,
            Screen::CategorySelection => ScreenKind::CategorySelection,
            Screen::Quiz(_) => ScreenKind::Quiz,
            Screen::Results(_) => ScreenKind::Results,
        }
    }
}

/// Bottom tab bar selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CurrentTab {
    #[default]
    Home,
    Progress,
    Profile,
    Settings,
}
