//! Configuration and file management for kwiz-kid
//!
//! This crate provides:
//! - Platform config/cache directory helpers
//! - Configuration file discovery (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{config_candidates, load_config_file};
pub use paths::{cache_dir, config_dir};
