//! Fixtures and fake collaborators for tests

use crate::actions::Action;
use crate::effect::Effects;
use crate::state::AppState;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use kwiz_domain::{
    AgeRange, AppError, Difficulty, Question, QuizCategory, QuizScore, SubscriptionStatus, User,
};
use kwiz_services::{AuthService, ContentService, SubscriptionService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn category(id: &str) -> QuizCategory {
    category_for_ages(id, 5, 12)
}

pub fn category_for_ages(id: &str, min: u32, max: u32) -> QuizCategory {
    QuizCategory {
        id: id.to_string(),
        name: format!("{} quiz", id),
        description: format!("All about {}", id),
        icon: "star.fill".to_string(),
        color: "blue".to_string(),
        difficulty: Difficulty::Easy,
        age_range: AgeRange::new(min, max),
    }
}

pub fn question(i: usize) -> Question {
    Question {
        id: format!("q{}", i),
        text: format!("What is {} + 1?", i),
        options: (i..i + 4).map(|n| (n + 1).to_string()).collect(),
        correct_answer: 0,
        explanation: format!("{} + 1 is {}", i, i + 1),
        difficulty: Difficulty::Easy,
    }
}

pub fn score(category: QuizCategory, correct_answers: usize) -> QuizScore {
    QuizScore {
        total_questions: 5,
        correct_answers,
        time_spent: 60,
        category,
        completed_at: Utc.with_ymd_and_hms(2024, 5, 6, 16, 0, 0).unwrap(),
    }
}

pub fn signed_in_state(age: u32) -> AppState {
    AppState {
        user: Some(User::new("kid-1", "Mia", age)),
        ..AppState::default()
    }
}

/// Run effects in order and collect the actions they produce
pub async fn run_effects(effects: Effects) -> Vec<Action> {
    let mut actions = Vec::new();
    for effect in effects.into_vec() {
        actions.extend(effect.run().await);
    }
    actions
}

pub struct FakeAuth {
    pub user: User,
    error: Option<AppError>,
    session: Mutex<Option<User>>,
    sign_outs: AtomicUsize,
}

impl FakeAuth {
    pub fn new(age: u32) -> Self {
        Self {
            user: User::new("kid-1", "Mia", age),
            error: None,
            session: Mutex::new(None),
            sign_outs: AtomicUsize::new(0),
        }
    }

    /// Start with the user already signed in
    pub fn signed_in(self) -> Self {
        *self.session.lock().unwrap() = Some(self.user.clone());
        self
    }

    pub fn failing(mut self, error: AppError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn sign_outs(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }

    fn result<T>(&self, value: T) -> Result<T, AppError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl AuthService for FakeAuth {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<User, AppError> {
        let user = self.result(self.user.clone())?;
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(&self, _email: &str, _password: &str, name: &str) -> Result<User, AppError> {
        let mut user = self.result(self.user.clone())?;
        user.name = name.to_string();
        *self.session.lock().unwrap() = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        self.result(())?;
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>, AppError> {
        self.result(self.session.lock().unwrap().clone())
    }
}

pub struct FakeSubscription {
    status: Mutex<SubscriptionStatus>,
    error: Option<AppError>,
}

impl FakeSubscription {
    pub fn new(status: SubscriptionStatus) -> Self {
        Self {
            status: Mutex::new(status),
            error: None,
        }
    }

    pub fn failing(mut self, error: AppError) -> Self {
        self.error = Some(error);
        self
    }

    fn status(&self) -> Result<SubscriptionStatus, AppError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(*self.status.lock().unwrap()),
        }
    }
}

#[async_trait]
impl SubscriptionService for FakeSubscription {
    async fn check_status(&self) -> Result<SubscriptionStatus, AppError> {
        self.status()
    }

    async fn purchase(&self) -> Result<(), AppError> {
        self.status()?;
        *self.status.lock().unwrap() = SubscriptionStatus::Premium;
        Ok(())
    }
}

pub struct FakeContent {
    categories: Vec<QuizCategory>,
    questions: Vec<Question>,
    error: Option<AppError>,
    delay: Option<Duration>,
}

impl FakeContent {
    pub fn new(categories: Vec<QuizCategory>) -> Self {
        Self {
            categories,
            questions: Vec::new(),
            error: None,
            delay: None,
        }
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    pub fn failing(mut self, error: AppError) -> Self {
        self.error = Some(error);
        self
    }

    /// Hold every question request for `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ContentService for FakeContent {
    async fn categories(&self) -> Result<Vec<QuizCategory>, AppError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.categories.clone()),
        }
    }

    async fn generate_questions(
        &self,
        _category: &QuizCategory,
        count: usize,
    ) -> Result<Vec<Question>, AppError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.questions.iter().take(count).cloned().collect()),
        }
    }
}
