//! External service interactions
//!
//! - Profile loading from an optional YAML override
//! - Log file setup and submission recording

pub mod content;
pub mod logging;

pub use content::{load_profile, resolve_profile};
pub use logging::record_submission;
