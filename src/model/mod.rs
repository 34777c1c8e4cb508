//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `ViewState` - Active tab, reveal progress, project selection, contact form
//! - `Profile` - Static portfolio content
//! - `ModalStack` - Modal overlay management

pub mod contact;
pub mod content;
pub mod modal;
pub mod reveal;
pub mod ui;
pub mod view_state;

// Re-export commonly used types
pub use contact::{ContactForm, Stage, Submission};
pub use content::{Profile, Project, Skill, SkillIcon};
pub use reveal::{RevealSequence, RevealTiming};
pub use ui::{AppMode, Tab, ThemeMode};
pub use view_state::ViewState;
