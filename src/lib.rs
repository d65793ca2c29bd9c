// Library exports for testing and potential library use

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod debug;
pub mod pages;
pub mod profile_window;
pub mod router;

pub use pages::Pages;
pub use router::{PROFILE_ROUTE, Router};
