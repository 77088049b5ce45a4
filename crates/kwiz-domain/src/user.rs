//! User profile and preferences

use crate::quiz::Difficulty;
use serde::{Deserialize, Serialize};

/// A signed-in child profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            preferences: UserPreferences::default(),
        }
    }
}

/// Per-user quiz preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub difficulty: Difficulty,
    /// Minutes
    pub session_length: u32,
    pub sound_effects: bool,
    /// Category ids
    pub favorite_categories: Vec<String>,
    pub parental_controls: ParentalControls,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            session_length: 15,
            sound_effects: true,
            favorite_categories: Vec::new(),
            parental_controls: ParentalControls::default(),
        }
    }
}

/// Limits a parent can put on a child's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentalControls {
    /// Minutes per session
    pub time_limit: u32,
    /// Minutes per day
    pub daily_time_limit: u32,
    pub content_filter: bool,
    pub progress_tracking: bool,
}

impl Default for ParentalControls {
    fn default() -> Self {
        Self {
            time_limit: 30,
            daily_time_limit: 60,
            content_filter: true,
            progress_tracking: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.difficulty, Difficulty::Easy);
        assert_eq!(prefs.session_length, 15);
        assert!(prefs.sound_effects);
        assert!(prefs.parental_controls.content_filter);
        assert_eq!(prefs.parental_controls.daily_time_limit, 60);
    }

    #[test]
    fn test_user_deserialize_without_preferences() {
        let json = r#"{"id":"u1","name":"Mia","age":7}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new("u1", "Mia", 7));
    }
}
