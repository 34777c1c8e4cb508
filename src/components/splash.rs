//! Splash screen component
//!
//! A fake terminal window "booting" the portfolio before the main screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
    owner: String,
    pub palette: Palette,
}

impl SplashComponent {
    pub fn new(owner: &str) -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
            owner: owner.to_string(),
            palette: Palette::dark(),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    /// Fraction of the boot animation done, 0.0..=1.0
    fn progress(&self) -> f32 {
        self.start_time
            .map(|t| (t.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0))
            .unwrap_or(0.0)
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(palette.base()), area);

        let window = crate::components::centered_popup(area, 48, 9);

        const BAR_WIDTH: usize = 30;
        let filled = (self.progress() * BAR_WIDTH as f32).round() as usize;
        let bar = format!(
            "[{}{}]",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        );

        let content = vec![
            Line::from(vec![
                Span::styled("● ", Style::default().fg(palette.error)),
                Span::styled("● ", Style::default().fg(palette.heading)),
                Span::styled("●", Style::default().fg(palette.accent)),
            ])
            .alignment(Alignment::Left),
            Line::from(""),
            Line::from(Span::styled(
                "C:\\Users\\Developer> boot portfolio.exe",
                palette.prompt(),
            )),
            Line::from(""),
            Line::from(Span::styled(bar, palette.prompt())),
            Line::from(""),
            Line::from(Span::styled(
                self.owner.clone(),
                palette.title().add_modifier(Modifier::ITALIC),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(palette.panel())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );

        frame.render_widget(paragraph, window);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let splash = SplashComponent::new("Jane");
        assert!(!splash.is_complete());
    }

    #[test]
    fn test_any_key_skips() {
        let mut splash = SplashComponent::new("Jane");
        let action = splash
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::SplashComplete));

        let action = splash
            .handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }
}
