//! Collaborator wiring
//!
//! Collaborators are handed to the middleware at construction time; nothing
//! in the state container reaches for a global instance.

use crate::middleware::{
    AnalyticsMiddleware, AuthMiddleware, CategoryMiddleware, ContentSafetyMiddleware,
    LifecycleMiddleware, LoggingMiddleware, QuizMiddleware, SubscriptionMiddleware,
};
use crate::state::AppState;
use crate::store::Store;
use kwiz_config::AppConfig;
use kwiz_domain::SubscriptionStatus;
use kwiz_services::{
    default_categories, generate_bank, AuthService, BatchGenerationConfig, ContentService,
    LocalContentService, MockAuthService, MockQuestionGenerator, QuestionBank,
    StubSubscriptionService, SubscriptionService,
};
use std::sync::Arc;

/// The collaborators the middleware talks to
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub subscription: Arc<dyn SubscriptionService>,
    pub content: Arc<dyn ContentService>,
}

impl Services {
    /// Offline collaborators: mock auth, a free-tier subscription stub and
    /// bank-first content backed by the mock generator
    pub fn local() -> Self {
        Self::with_bank(Arc::new(QuestionBank::new()))
    }

    /// Offline collaborators serving content from an existing bank
    pub fn with_bank(bank: Arc<QuestionBank>) -> Self {
        Self {
            auth: Arc::new(MockAuthService::new()),
            subscription: Arc::new(StubSubscriptionService::new(SubscriptionStatus::Free)),
            content: Arc::new(LocalContentService::new(bank, MockQuestionGenerator)),
        }
    }
}

/// Fill a fresh bank for the catalog when the config asks for seeding
pub async fn seed_bank(config: &AppConfig) -> Arc<QuestionBank> {
    let bank = Arc::new(QuestionBank::new());
    if config.seed_questions_per_category == 0 {
        return bank;
    }

    let batch = BatchGenerationConfig::matching_catalog(
        default_categories(),
        config.seed_questions_per_category,
    );
    generate_bank(&batch, &MockQuestionGenerator, &bank, |progress| {
        log::debug!(
            "Seeding {:.0}%: {}",
            progress.percentage() * 100.0,
            progress.current_task
        );
    })
    .await;

    let stats = bank.stats();
    log::info!(
        "Question bank seeded with {} questions: {:?}",
        stats.total_questions,
        stats.by_category
    );
    bank
}

/// Create a store with the full middleware chain
pub fn build_store(config: &AppConfig, services: &Services) -> Store {
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(AnalyticsMiddleware::new()));
    store.add_middleware(Box::new(LifecycleMiddleware::new()));
    store.add_middleware(Box::new(ContentSafetyMiddleware::new(
        config.enforce_age_range,
    )));
    store.add_middleware(Box::new(AuthMiddleware::new(services.auth.clone())));
    store.add_middleware(Box::new(CategoryMiddleware::new(services.content.clone())));
    store.add_middleware(Box::new(QuizMiddleware::new(
        services.content.clone(),
        config,
    )));
    store.add_middleware(Box::new(SubscriptionMiddleware::new(
        services.subscription.clone(),
    )));

    store
}
