//! Theme provider - maps the light/dark mode to concrete colors

use crate::model::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by every panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub heading: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(10, 25, 47),
            surface: Color::Rgb(17, 34, 64),
            text: Color::Rgb(136, 146, 176),
            heading: Color::Rgb(204, 214, 246),
            accent: Color::Rgb(100, 255, 218),
            muted: Color::Rgb(73, 86, 112),
            error: Color::Rgb(255, 107, 107),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 247, 250),
            surface: Color::Rgb(226, 232, 240),
            text: Color::Rgb(71, 85, 105),
            heading: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(13, 148, 136),
            muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(220, 38, 38),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn prompt(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled button, e.g. the resume link and Submit
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

/// Holds the current mode; the rest of the UI asks it for a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Dark => Palette::dark(),
            ThemeMode::Light => Palette::light(),
        }
    }
}
