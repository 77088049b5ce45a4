//! Actions module
//!
//! Every event that can change application state, tagged by concern.
//! Actions are plain data; the reducer and middleware give them meaning.
//! The root enum and every concern enum are matched exhaustively, so adding
//! a variant does not compile until the reducer handles it.

pub mod auth;
pub mod category;
pub mod lifecycle;
pub mod navigation;
pub mod quiz;
pub mod settings;
pub mod subscription;
pub mod ui;

pub use auth::AuthAction;
pub use category::CategoryAction;
pub use lifecycle::LifecycleAction;
pub use navigation::NavigationAction;
pub use quiz::QuizAction;
pub use settings::SettingsAction;
pub use subscription::SubscriptionAction;
pub use ui::UiAction;

/// Root action enum - tagged by concern
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// App lifecycle events from the host platform
    Lifecycle(LifecycleAction),
    /// Sign in, sign up, sign out and their outcomes
    Auth(AuthAction),
    /// Category catalog loading
    Category(CategoryAction),
    /// Quiz flow from category pick to score
    Quiz(QuizAction),
    /// Screen and tab navigation
    Navigation(NavigationAction),
    /// Subscription status and purchases
    Subscription(SubscriptionAction),
    /// Loading indicator and error banner
    Ui(UiAction),
    /// User preference edits
    Settings(SettingsAction),
}

impl From<LifecycleAction> for Action {
    fn from(action: LifecycleAction) -> Self {
        Action::Lifecycle(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<CategoryAction> for Action {
    fn from(action: CategoryAction) -> Self {
        Action::Category(action)
    }
}

impl From<QuizAction> for Action {
    fn from(action: QuizAction) -> Self {
        Action::Quiz(action)
    }
}

impl From<NavigationAction> for Action {
    fn from(action: NavigationAction) -> Self {
        Action::Navigation(action)
    }
}

impl From<SubscriptionAction> for Action {
    fn from(action: SubscriptionAction) -> Self {
        Action::Subscription(action)
    }
}

impl From<UiAction> for Action {
    fn from(action: UiAction) -> Self {
        Action::Ui(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::Settings(action)
    }
}
