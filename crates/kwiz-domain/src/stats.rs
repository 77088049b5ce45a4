//! Cumulative learning statistics
//!
//! `UserStats` is folded forward one completed quiz at a time. Folding only
//! looks at the score itself (including its completion timestamp), so
//! replaying the same scores always yields the same stats.

use crate::quiz::QuizScore;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_quizzes_completed: u32,
    pub total_questions_answered: u32,
    pub correct_answers: u32,
    /// Seconds
    pub total_time_spent: u32,
    /// Consecutive calendar days with at least one quiz
    pub current_streak: u32,
    pub longest_streak: u32,
    pub achievements: Vec<Achievement>,
    /// Keyed by category id
    pub category_stats: BTreeMap<String, CategoryStats>,
    /// Oldest week first
    pub weekly_progress: Vec<WeeklyProgress>,
    pub last_quiz_date: Option<DateTime<Utc>>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_quizzes_completed: 0,
            total_questions_answered: 0,
            correct_answers: 0,
            total_time_spent: 0,
            current_streak: 0,
            longest_streak: 0,
            achievements: Achievement::catalog(),
            category_stats: BTreeMap::new(),
            weekly_progress: Vec::new(),
            last_quiz_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub quizzes_completed: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Fraction of correct answers, 0.0..=1.0
    pub accuracy: f64,
    /// Mean percentage over all quizzes
    pub average_score: f64,
    /// Best percentage
    pub best_score: u32,
    pub time_spent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Monday of the week
    pub week_start: NaiveDate,
    pub quizzes_completed: u32,
    pub time_spent: u32,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub is_unlocked: bool,
    pub unlocked_date: Option<DateTime<Utc>>,
    pub progress: u32,
    pub requirement: u32,
}

impl Achievement {
    pub const FIRST_QUIZ: &'static str = "first_quiz";
    pub const QUIZ_MASTER: &'static str = "quiz_master";
    pub const PERFECT_SCORE: &'static str = "perfect_score";
    pub const STREAK_3: &'static str = "streak_3";
    pub const EXPLORER: &'static str = "explorer";

    fn locked(id: &str, title: &str, description: &str, icon: &str, requirement: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            is_unlocked: false,
            unlocked_date: None,
            progress: 0,
            requirement,
        }
    }

    /// All achievements a new profile starts with, locked
    pub fn catalog() -> Vec<Achievement> {
        vec![
            Self::locked(Self::FIRST_QUIZ, "First Steps", "Complete your first quiz", "star.fill", 1),
            Self::locked(Self::QUIZ_MASTER, "Quiz Master", "Complete 10 quizzes", "crown.fill", 10),
            Self::locked(
                Self::PERFECT_SCORE,
                "Perfect Score",
                "Answer every question in a quiz correctly",
                "checkmark.seal.fill",
                1,
            ),
            Self::locked(Self::STREAK_3, "On a Roll", "Play three days in a row", "flame.fill", 3),
            Self::locked(Self::EXPLORER, "Explorer", "Try three different categories", "map.fill", 3),
        ]
    }

    fn advance(&mut self, progress: u32, at: DateTime<Utc>) {
        self.progress = self.progress.max(progress.min(self.requirement));
        if !self.is_unlocked && self.progress >= self.requirement {
            self.is_unlocked = true;
            self.unlocked_date = Some(at);
        }
    }
}

impl UserStats {
    /// Fold one completed quiz into the aggregate
    pub fn record(&mut self, score: &QuizScore) {
        let total = clamp_count(score.total_questions);
        let correct = clamp_count(score.correct_answers);
        let percentage = score.percentage();

        self.total_quizzes_completed = self.total_quizzes_completed.saturating_add(1);
        self.total_questions_answered = self.total_questions_answered.saturating_add(total);
        self.correct_answers = self.correct_answers.saturating_add(correct);
        self.total_time_spent = self.total_time_spent.saturating_add(score.time_spent);

        let entry = self
            .category_stats
            .entry(score.category.id.clone())
            .or_default();
        entry.average_score = running_mean(entry.average_score, entry.quizzes_completed, percentage);
        entry.quizzes_completed = entry.quizzes_completed.saturating_add(1);
        entry.total_questions = entry.total_questions.saturating_add(total);
        entry.correct_answers = entry.correct_answers.saturating_add(correct);
        entry.accuracy = if entry.total_questions == 0 {
            0.0
        } else {
            f64::from(entry.correct_answers) / f64::from(entry.total_questions)
        };
        entry.best_score = entry.best_score.max(percentage);
        entry.time_spent = entry.time_spent.saturating_add(score.time_spent);

        self.update_streak(score.completed_at);
        self.update_week(score.completed_at, score.time_spent, percentage);
        self.update_achievements(score);
    }

    /// Overall fraction of correct answers
    pub fn accuracy(&self) -> f64 {
        if self.total_questions_answered == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_questions_answered)
    }

    pub fn unlocked_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.is_unlocked)
    }

    fn update_streak(&mut self, completed_at: DateTime<Utc>) {
        let day = completed_at.date_naive();
        self.current_streak = match self.last_quiz_date.map(|d| d.date_naive()) {
            None => 1,
            Some(last) if last.checked_add_days(Days::new(1)) == Some(day) => {
                self.current_streak.saturating_add(1)
            }
            // same day, or a score arriving out of order
            Some(last) if day <= last => self.current_streak.max(1),
            Some(_) => 1,
        };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_quiz_date = Some(match self.last_quiz_date {
            Some(last) if last > completed_at => last,
            _ => completed_at,
        });
    }

    fn update_week(&mut self, completed_at: DateTime<Utc>, time_spent: u32, percentage: u32) {
        let day = completed_at.date_naive();
        let week_start = day
            .checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
            .unwrap_or(day);

        match self
            .weekly_progress
            .iter_mut()
            .find(|w| w.week_start == week_start)
        {
            Some(week) => {
                week.average_score =
                    running_mean(week.average_score, week.quizzes_completed, percentage);
                week.quizzes_completed = week.quizzes_completed.saturating_add(1);
                week.time_spent = week.time_spent.saturating_add(time_spent);
            }
            None => {
                self.weekly_progress.push(WeeklyProgress {
                    week_start,
                    quizzes_completed: 1,
                    time_spent,
                    average_score: f64::from(percentage),
                });
                self.weekly_progress.sort_by_key(|w| w.week_start);
            }
        }
    }

    fn update_achievements(&mut self, score: &QuizScore) {
        if self.achievements.is_empty() {
            self.achievements = Achievement::catalog();
        }

        let quizzes = self.total_quizzes_completed;
        let streak = self.longest_streak;
        let categories = clamp_count(self.category_stats.len());
        let perfect = u32::from(score.is_perfect());

        for achievement in &mut self.achievements {
            let progress = match achievement.id.as_str() {
                Achievement::FIRST_QUIZ | Achievement::QUIZ_MASTER => quizzes,
                Achievement::PERFECT_SCORE => perfect,
                Achievement::STREAK_3 => streak,
                Achievement::EXPLORER => categories,
                _ => continue,
            };
            achievement.advance(progress, score.completed_at);
        }
    }
}

fn running_mean(mean: f64, count: u32, value: u32) -> f64 {
    let count = f64::from(count);
    (mean * count + f64::from(value)) / (count + 1.0)
}

/// Counts past `u32::MAX` pin at the maximum
fn clamp_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
