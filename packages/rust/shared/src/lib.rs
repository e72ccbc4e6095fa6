//! Shared types, error model, and configuration for LearnScout.
//!
//! This crate is the foundation depended on by all other LearnScout crates.
//! It provides:
//! - [`LearnScoutError`] — the unified error type
//! - Domain types ([`Resource`], [`ResourceType`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DiscoveryConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{LearnScoutError, Result};
pub use types::{MAX_RESULTS, Resource, ResourceType};
