//! Middleware system
//!
//! Middleware sits between dispatch and the reducer:
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//!               │
//!               └──► Effects ──(completion)──► Dispatcher
//! ```
//!
//! Each middleware can:
//! - Inspect the action and the state before this dispatch
//! - Rewrite the action handed to the next middleware
//! - Schedule effects whose completion dispatches a new action
//!
//! Middleware never touches state and never spawns tasks itself.

use crate::actions::Action;
use crate::effect::Effects;
use crate::state::AppState;

pub mod analytics_middleware;
pub mod auth_middleware;
pub mod category_middleware;
pub mod content_safety_middleware;
pub mod lifecycle_middleware;
pub mod logging_middleware;
pub mod quiz_middleware;
pub mod subscription_middleware;

pub use analytics_middleware::AnalyticsMiddleware;
pub use auth_middleware::AuthMiddleware;
pub use category_middleware::CategoryMiddleware;
pub use content_safety_middleware::ContentSafetyMiddleware;
pub use lifecycle_middleware::LifecycleMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use quiz_middleware::QuizMiddleware;
pub use subscription_middleware::SubscriptionMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action produced by the previous middleware
    /// - `state`: State before this dispatch (read-only)
    /// - `effects`: Collects async work for the store to schedule
    ///
    /// Returns the action for the next middleware, usually `action` unchanged
    fn handle(&mut self, action: Action, state: &AppState, effects: &mut Effects) -> Action;
}
