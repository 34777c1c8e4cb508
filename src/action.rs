//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::Tab;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Activate a specific tab
    SelectTab(Tab),
    /// Move to next tab
    NextTab,
    /// Move to previous tab
    PrevTab,
    /// Move to next item in list
    NextItem,
    /// Move to previous item in list
    PrevItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the project under the cursor
    ToggleProject,
    /// Open or close the project at an index (mouse)
    ToggleProjectNamed(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Contact Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Type a character into the active field
    ContactInput(char),
    /// Delete the last character of the active field
    ContactBackspace,
    /// Commit the active field (Enter)
    ContactCommit,
    /// Explicit submit at the message stage
    ContactSubmit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the compact navigation menu
    OpenMenu,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in modal
    ModalUp,
    /// Navigate down in modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between light and dark theme
    ToggleTheme,
    /// Show where the resume lives
    ShowResume,
    /// Pointer moved to (column, row)
    PointerMoved(u16, u16),
    /// Terminal lost or regained focus
    FocusChanged(bool),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::SelectTab(tab) => write!(f, "SelectTab({})", tab.name()),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::ToggleProject => write!(f, "ToggleProject"),
            Action::ToggleProjectNamed(name) => write!(f, "ToggleProjectNamed({})", name),
            Action::ContactInput(c) => write!(f, "ContactInput('{}')", c),
            Action::ContactBackspace => write!(f, "ContactBackspace"),
            Action::ContactCommit => write!(f, "ContactCommit"),
            Action::ContactSubmit => write!(f, "ContactSubmit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenMenu => write!(f, "OpenMenu"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::ToggleTheme => write!(f, "ToggleTheme"),
            Action::ShowResume => write!(f, "ShowResume"),
            Action::PointerMoved(x, y) => write!(f, "PointerMoved({}, {})", x, y),
            Action::FocusChanged(focused) => write!(f, "FocusChanged({})", focused),
        }
    }
}
