//! UI state - presentation enums shared by the model and components

use serde::{Deserialize, Serialize};

/// Tab selection in the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    About,
    Skills,
    Projects,
    Contact,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![Tab::About, Tab::Skills, Tab::Projects, Tab::Contact]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::About => "about",
            Tab::Skills => "skills",
            Tab::Projects => "projects",
            Tab::Contact => "contact",
        }
    }

    /// Label shown in the header, e.g. `about.exe`
    pub fn label(&self) -> String {
        format!("{}.exe", self.name())
    }

    /// Command echoed at the top of the tab's panel
    pub fn command(&self) -> &str {
        match self {
            Tab::About => "run portfolio.exe",
            Tab::Skills => "list_skills.exe",
            Tab::Projects => "list_projects.exe",
            Tab::Contact => "contact.exe",
        }
    }

    /// Tab for a 1-based number key
    pub fn from_number(n: u32) -> Option<Tab> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Tab::all().get(index).copied()
    }

    /// Position in header order
    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + 1) % tabs.len()]
    }

    pub fn previous(&self) -> Tab {
        let tabs = Tab::all();
        tabs[(self.index() + tabs.len() - 1) % tabs.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Light/dark theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Contact.next(), Tab::About);
        assert_eq!(Tab::About.previous(), Tab::Contact);
        assert_eq!(Tab::Skills.next(), Tab::Projects);
    }

    #[test]
    fn test_tab_from_number() {
        assert_eq!(Tab::from_number(1), Some(Tab::About));
        assert_eq!(Tab::from_number(4), Some(Tab::Contact));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(5), None);
    }

    #[test]
    fn test_tab_label() {
        assert_eq!(Tab::Projects.label(), "projects.exe");
    }
}
