use kwiz_domain::{AgeRange, Difficulty, QuizCategory};

fn category(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    color: &str,
    difficulty: Difficulty,
    age_range: AgeRange,
) -> QuizCategory {
    QuizCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        difficulty,
        age_range,
    }
}

/// The built-in category catalog, in display order
pub fn default_categories() -> Vec<QuizCategory> {
    vec![
        category(
            "math",
            "Math Magic",
            "Numbers, shapes, and calculations",
            "plus.circle.fill",
            "blue",
            Difficulty::Easy,
            AgeRange::new(5, 12),
        ),
        category(
            "science",
            "Science Fun",
            "Discover the wonders of science",
            "atom",
            "green",
            Difficulty::Easy,
            AgeRange::new(6, 12),
        ),
        category(
            "reading",
            "Reading Adventure",
            "Words, stories, and language",
            "book.fill",
            "orange",
            Difficulty::Easy,
            AgeRange::new(4, 10),
        ),
        category(
            "history",
            "Time Travel",
            "Explore the past and present",
            "clock.fill",
            "purple",
            Difficulty::Medium,
            AgeRange::new(8, 14),
        ),
        category(
            "geography",
            "World Explorer",
            "Countries, capitals, and cultures",
            "globe",
            "teal",
            Difficulty::Medium,
            AgeRange::new(7, 12),
        ),
        category(
            "art",
            "Creative Corner",
            "Colors, artists, and creativity",
            "paintbrush.fill",
            "pink",
            Difficulty::Easy,
            AgeRange::new(5, 12),
        ),
    ]
}
