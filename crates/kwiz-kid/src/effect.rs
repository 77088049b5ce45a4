//! Effects returned by middleware
//!
//! Middleware never spawns work itself. It describes the work as an
//! [`Effect`] and the store decides how to run it: spawned on tokio while the
//! store loop is running, or awaited inline by [`Store::settle`] in tests.
//!
//! Every constructor maps failure to an action, so an effect can only end by
//! producing a follow-up action or by producing nothing on success. A
//! screen-scoped effect also carries the action to apply if it is cancelled,
//! so state it put into motion (a loading flag, say) is unwound.
//!
//! [`Store::settle`]: crate::store::Store::settle

use crate::actions::Action;
use kwiz_domain::AppError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// BoxFuture type alias for effect futures
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Lifetime of an in-flight effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EffectScope {
    /// Runs to completion
    #[default]
    App,
    /// Cancelled when the active screen changes before it completes
    Screen,
}

/// A pending asynchronous operation and the action it resolves to
pub struct Effect {
    name: &'static str,
    scope: EffectScope,
    on_cancel: Option<Action>,
    future: BoxFuture<'static, Option<Action>>,
}

impl Effect {
    /// Operation that yields its follow-up action, or `on_error`'s action on failure
    pub fn task<F, E>(name: &'static str, future: F, on_error: E) -> Self
    where
        F: Future<Output = Result<Action, AppError>> + Send + 'static,
        E: FnOnce(AppError) -> Action + Send + 'static,
    {
        Self::maybe(name, async move { future.await.map(Some) }, on_error)
    }

    /// Operation with no follow-up on success
    pub fn fire<F, E>(name: &'static str, future: F, on_error: E) -> Self
    where
        F: Future<Output = Result<(), AppError>> + Send + 'static,
        E: FnOnce(AppError) -> Action + Send + 'static,
    {
        Self::maybe(name, async move { future.await.map(|()| None) }, on_error)
    }

    /// Operation whose success may or may not have a follow-up
    pub fn maybe<F, E>(name: &'static str, future: F, on_error: E) -> Self
    where
        F: Future<Output = Result<Option<Action>, AppError>> + Send + 'static,
        E: FnOnce(AppError) -> Action + Send + 'static,
    {
        Self::new(name, async move {
            match future.await {
                Ok(action) => action,
                Err(e) => {
                    log::warn!("Effect {} failed: {}", name, e);
                    Some(on_error(e))
                }
            }
        })
    }

    /// Follow-up action with no I/O in between
    pub fn dispatch(name: &'static str, action: Action) -> Self {
        Self::new(name, async move { Some(action) })
    }

    fn new<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        Self {
            name,
            scope: EffectScope::App,
            on_cancel: None,
            future: Box::pin(future),
        }
    }

    /// Cancel this effect if the user navigates to another screen, applying
    /// `on_cancel` in place of its result
    pub fn screen_scoped(mut self, on_cancel: impl Into<Action>) -> Self {
        self.scope = EffectScope::Screen;
        self.on_cancel = Some(on_cancel.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scope(&self) -> EffectScope {
        self.scope
    }

    pub fn on_cancel(&self) -> Option<&Action> {
        self.on_cancel.as_ref()
    }

    /// Run the effect to completion
    pub async fn run(self) -> Option<Action> {
        self.future.await
    }

    /// Split into the cancellation action and the work itself
    pub(crate) fn into_parts(self) -> (Option<Action>, BoxFuture<'static, Option<Action>>) {
        (self.on_cancel, self.future)
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("on_cancel", &self.on_cancel)
            .finish_non_exhaustive()
    }
}

/// Effects collected from the middleware chain during one dispatch
#[derive(Debug, Default)]
pub struct Effects {
    effects: Vec<Effect>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: Effect) {
        log::debug!("Scheduling effect {}", effect.name());
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Names in scheduling order
    pub fn names(&self) -> Vec<&'static str> {
        self.effects.iter().map(Effect::name).collect()
    }

    pub fn into_vec(self) -> Vec<Effect> {
        self.effects
    }
}
