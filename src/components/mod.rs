//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod about;
pub mod contact;
pub mod cursor;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod menu_dialog;
pub mod particles;
pub mod projects;
pub mod quit_dialog;
pub mod skills;
pub mod splash;
pub mod theme;

pub use cursor::CursorFollower;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use menu_dialog::MenuDialog;
pub use particles::ParticleField;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use theme::{Palette, Theme};
