//! KwizKid state container
//!
//! A single-writer Redux-style store: typed actions, a pure reducer, a
//! middleware chain that schedules effects, and a store that serializes
//! every dispatch and publishes committed snapshots.

pub mod actions;
pub mod dispatcher;
pub mod effect;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;
pub mod wiring;

#[cfg(test)]
mod testing;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use effect::{Effect, EffectScope, Effects};
pub use state::{AppState, CurrentTab, Screen, ScreenKind};
pub use store::{Store, StoreHandle};
pub use wiring::{build_store, seed_bank, Services};
