//! Application configuration
//!
//! Configuration loaded from `.kwiz-kid.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.kwiz-kid.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of questions requested for each quiz
    #[serde(default = "default_questions_per_quiz")]
    pub questions_per_quiz: usize,

    /// Time budget per question; the quiz time limit is this times the question count
    #[serde(default = "default_seconds_per_question")]
    pub seconds_per_question: u32,

    /// Block quizzes whose category is aimed at children older than the user
    #[serde(default = "default_enforce_age_range")]
    pub enforce_age_range: bool,

    /// Questions to pre-generate for each catalog category at startup; 0 skips seeding
    #[serde(default)]
    pub seed_questions_per_category: usize,
}

fn default_questions_per_quiz() -> usize {
    5
}

fn default_seconds_per_question() -> u32 {
    30
}

fn default_enforce_age_range() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            questions_per_quiz: default_questions_per_quiz(),
            seconds_per_question: default_seconds_per_question(),
            enforce_age_range: default_enforce_age_range(),
            seed_questions_per_category: 0,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a TOML document, filling missing keys with defaults
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Quiz time limit in seconds for the given number of questions
    pub fn quiz_time_limit(&self, question_count: usize) -> u32 {
        self.seconds_per_question
            .saturating_mul(u32::try_from(question_count).unwrap_or(u32::MAX))
    }
}
