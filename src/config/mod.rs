//! Configuration module
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
