//! Configuration and data model for the showcase profile editor.
//!
//! This crate provides:
//!
//! - Application configuration (`Config`) with YAML loading and saving
//! - The user profile record edited by the profile form
//! - Showcase records (projects, authors, comments) and their categories
//! - The default skill catalog offered by the tag selector
//! - The profile store collaborator and an in-memory implementation

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod profile;
pub mod showcase;
mod types;

// Re-export main types for convenience
pub use catalog::{CATEGORIES, TECHNOLOGIES, default_catalog};
pub use config::Config;
pub use error::ConfigError;
pub use profile::{MemoryProfileStore, ProfileStore, SocialPlatform, UserProfile};
pub use showcase::{Author, Comment, Project};
pub use types::LogLevel;
