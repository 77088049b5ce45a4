//! Child-safety and age-adaptation heuristics
//!
//! Word-list filters and substitutions applied to generated content before
//! it reaches a child. Blocked words match by substring; masked words match
//! whole words only.

use kwiz_domain::{Difficulty, Question, QuizCategory, QuizScore};
use regex::Regex;
use std::sync::OnceLock;

/// Words that disqualify generated content outright
const BLOCKED_FOR_CHILDREN: &[&str] = &[
    "violence",
    "weapon",
    "danger",
    "scary",
    "frightening",
    "inappropriate",
    "adult",
    "mature",
    "explicit",
    "harmful",
];

/// Words that only disqualify content for the youngest children
const BLOCKED_UNDER_EIGHT: &[&str] = &["violence", "weapon", "danger", "scary", "frightening"];

/// Words masked in free text
const MASKED_WORDS: &[&str] = &["bad", "stupid", "dumb", "hate", "kill", "die", "dead"];

const SIMPLER_WORDS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("demonstrate", "show"),
    ("approximately", "about"),
    ("consequently", "so"),
    ("furthermore", "also"),
    ("nevertheless", "but"),
];

const RICHER_WORDS: &[(&str, &str)] = &[
    ("big", "large"),
    ("small", "tiny"),
    ("good", "excellent"),
    ("bad", "poor"),
    ("fast", "rapid"),
    ("slow", "gradual"),
];

/// Words longer than this count toward a text's complexity
const LONG_WORD: usize = 8;

/// Moderation scores below this are rejected
const MIN_AGE_SCORE: f64 = 0.7;

fn mask_regex() -> Option<&'static Regex> {
    static MASK: OnceLock<Option<Regex>> = OnceLock::new();
    MASK.get_or_init(|| {
        let pattern = format!(r"(?i)\b(?:{})\b", MASKED_WORDS.join("|"));
        Regex::new(&pattern)
            .map_err(|e| log::error!("Mask pattern rejected: {}", e))
            .ok()
    })
    .as_ref()
}

fn replace_all(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

fn blocked_words(content: &str) -> Vec<&'static str> {
    let lowered = content.to_lowercase();
    BLOCKED_FOR_CHILDREN
        .iter()
        .copied()
        .filter(|word| lowered.contains(word))
        .collect()
}

/// Content contains none of the blocked words (case-insensitive)
pub fn validate_content_for_children(content: &str) -> bool {
    blocked_words(content).is_empty()
}

/// Frightening content is only rejected for children under eight
pub fn is_content_appropriate_for_age(content: &str, age: u32) -> bool {
    if age >= 8 {
        return true;
    }
    let lowered = content.to_lowercase();
    !BLOCKED_UNDER_EIGHT.iter().any(|word| lowered.contains(word))
}

/// Mask unkind words with `***`, ignoring case
pub fn filter_content(content: &str) -> String {
    match mask_regex() {
        Some(mask) => mask.replace_all(content, "***").into_owned(),
        None => content.to_string(),
    }
}

/// Verdict on a piece of text for a reader of a given age
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationResult {
    pub is_approved: bool,
    pub reason: String,
    /// 0.0 to 1.0
    pub confidence: f64,
}

/// Share of whitespace-separated words longer than eight characters
fn complexity(text: &str) -> f64 {
    let (words, long) = text.split_whitespace().fold((0usize, 0usize), |(n, long), word| {
        (n + 1, long + usize::from(word.chars().count() > LONG_WORD))
    });
    if words == 0 {
        return 0.0;
    }
    long as f64 / words as f64
}

/// How well the text's vocabulary suits the reader's age
fn age_score(text: &str, age: u32) -> f64 {
    let (max_complexity, penalty) = match age {
        0..=5 => (0.1, 0.5),
        6..=9 => (0.2, 0.7),
        10..=13 => (0.3, 0.8),
        _ => return 1.0,
    };
    if complexity(text) < max_complexity {
        1.0
    } else {
        penalty
    }
}

/// Screen text for blocked words, then for vocabulary beyond the reader's age
pub fn moderate_content(text: &str, age: u32) -> ModerationResult {
    let found = blocked_words(text);
    if !found.is_empty() {
        return ModerationResult {
            is_approved: false,
            reason: format!("Content contains inappropriate words: {}", found.join(", ")),
            confidence: 0.9,
        };
    }

    let score = age_score(text, age);
    if score < MIN_AGE_SCORE {
        ModerationResult {
            is_approved: false,
            reason: format!("Content may not be appropriate for age {}", age),
            confidence: score,
        }
    } else {
        ModerationResult {
            is_approved: true,
            reason: "Content is appropriate".to_string(),
            confidence: score,
        }
    }
}

/// Simplify vocabulary for children under eight
pub fn adjust_language_for_age(content: &str, age: u32) -> String {
    if age < 8 {
        replace_all(content, SIMPLER_WORDS)
    } else {
        content.to_string()
    }
}

/// Rewrite question wording to match the target difficulty
pub fn adjust_difficulty(mut question: Question, difficulty: Difficulty) -> Question {
    let table = match difficulty {
        Difficulty::Easy => SIMPLER_WORDS,
        Difficulty::Medium => return question,
        Difficulty::Hard => RICHER_WORDS,
    };
    question.text = replace_all(&question.text, table);
    question.explanation = replace_all(&question.explanation, table);
    question
}

/// Age adaptation plus difficulty rewrite, as applied to generated questions
pub fn prepare_question(mut question: Question, category: &QuizCategory) -> Question {
    let age = category.age_range.min;
    question.text = adjust_language_for_age(&question.text, age);
    question.explanation = adjust_language_for_age(&question.explanation, age);
    adjust_difficulty(question, category.difficulty)
}

/// Suggested session length in minutes
pub fn recommended_time_limit(age: u32) -> u32 {
    match age {
        4..=6 => 15,
        7..=9 => 20,
        _ => 30,
    }
}

pub fn should_track_progress(age: u32) -> bool {
    age >= 6
}

/// Results message, plainer for younger children
pub fn progress_report(score: &QuizScore, age: u32) -> String {
    if age < 8 {
        format!(
            "Great job! You got {} out of {} questions right!",
            score.correct_answers, score.total_questions
        )
    } else {
        format!(
            "You scored {}% on the {} quiz. You got {} out of {} questions correct!",
            score.percentage(),
            score.category.name,
            score.correct_answers,
            score.total_questions
        )
    }
}

/// Subtopics used to vary questions within a topic
pub fn expand_topic(topic: &str) -> Vec<String> {
    let subtopics: &[&str] = match topic.to_lowercase().as_str() {
        "math" => &[
            "addition",
            "subtraction",
            "multiplication",
            "division",
            "shapes",
            "counting",
            "patterns",
        ],
        "science" => &[
            "animals",
            "plants",
            "weather",
            "space",
            "matter",
            "energy",
            "environment",
        ],
        "reading" => &[
            "phonics",
            "vocabulary",
            "comprehension",
            "grammar",
            "spelling",
            "storytelling",
        ],
        "history" => &[
            "ancient civilizations",
            "famous people",
            "inventions",
            "cultures",
            "timeline",
            "geography",
        ],
        "geography" => &[
            "countries",
            "capitals",
            "continents",
            "oceans",
            "landmarks",
            "cultures",
            "climate",
        ],
        "art" => &[
            "colors",
            "shapes",
            "famous artists",
            "art techniques",
            "materials",
            "creativity",
        ],
        _ => return vec![topic.to_string()],
    };
    subtopics.iter().map(|s| s.to_string()).collect()
}

/// Generation topic for a catalog category
pub fn topic_for_category(category: &QuizCategory) -> String {
    let topic = match category.id.as_str() {
        "math" => "mathematics and numbers",
        "science" => "science and nature",
        "reading" => "reading and language",
        "history" => "history and historical events",
        "geography" => "geography and world knowledge",
        "art" => "art and creativity",
        _ => return category.name.clone(),
    };
    topic.to_string()
}
