//! Domain model for KwizKid
//!
//! Plain value types shared by the state container and the service layer:
//! users and their preferences, the quiz catalog, scores, cumulative stats
//! and the closed application error set.

pub mod error;
pub mod quiz;
pub mod stats;
pub mod subscription;
pub mod user;

pub use error::AppError;
pub use quiz::{AgeRange, Difficulty, Question, Quiz, QuizCategory, QuizScore};
pub use stats::{Achievement, CategoryStats, UserStats, WeeklyProgress};
pub use subscription::SubscriptionStatus;
pub use user::{ParentalControls, User, UserPreferences};
