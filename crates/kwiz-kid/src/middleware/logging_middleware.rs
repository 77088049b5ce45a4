use crate::actions::Action;
use crate::effect::Effects;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Logging middleware - logs every action passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: Action, state: &AppState, _effects: &mut Effects) -> Action {
        log::debug!("Action: {:?} (screen: {})", action, state.current_screen.kind());
        action
    }
}
