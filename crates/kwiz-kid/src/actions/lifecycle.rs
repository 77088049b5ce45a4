//! Lifecycle actions
//!
//! Reported by the host platform as the app starts and moves between
//! foreground and background.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleAction {
    /// App finished launching
    AppLaunched,
    AppWillEnterForeground,
    AppDidEnterBackground,
}
