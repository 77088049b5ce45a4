//! Collaborators consumed by the kwiz-kid state container
//!
//! Each concern is a trait so the store's middleware can be wired with the
//! local implementations below or with test fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ContentService trait            │
//! │  - categories()                              │
//! │  - generate_questions()                      │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │ LocalContentService                          │
//! │   QuestionBank ──miss──► QuestionGenerator   │
//! │        ▲                       │             │
//! │        └──── store safe ◄──────┘             │
//! │                   (fallback: mock questions) │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! [`generate_bank`] fills the same bank ahead of time, one task per
//! category, difficulty and age range.

pub mod auth;
pub mod batch;
pub mod catalog;
pub mod content;
pub mod generator;
pub mod question_bank;
pub mod safety;
pub mod subscription;

pub use auth::{AuthService, MockAuthService};
pub use batch::{generate_bank, BatchGenerationConfig, GenerationProgress};
pub use catalog::default_categories;
pub use content::{ContentService, LocalContentService};
pub use generator::{fallback_questions, MockQuestionGenerator, QuestionGenerator};
pub use question_bank::{BankStats, QuestionBank, QuestionQuery, StoredQuestion};
pub use subscription::{StubSubscriptionService, SubscriptionService};
