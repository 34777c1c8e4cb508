//! Help dialog component
//!
//! Displays all keyboard shortcuts available in the application.

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::Palette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
pub struct HelpDialog {
    pub scroll_offset: usize,
    pub palette: Palette,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            palette: Palette::dark(),
        }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.scroll_offset = 0;
                Some(Action::CloseModal)
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let margin = 2;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content(&palette);
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .style(palette.panel())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" help.exe ")
                    .title_style(palette.prompt().add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(palette.accent)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let sections: [(&str, &[(&str, &str)]); 5] = [
        (
            "Navigation",
            &[
                ("Tab / →", "Next tab"),
                ("S-Tab / ←", "Previous tab"),
                ("1-4", "Jump to about/skills/projects/contact"),
                ("m", "Open navigation menu"),
                ("click", "Select tab or project"),
            ],
        ),
        (
            "Projects",
            &[
                ("j / ↓", "Next project"),
                ("k / ↑", "Previous project"),
                ("Enter/Space", "Open or close project details"),
            ],
        ),
        (
            "Contact",
            &[
                ("type", "Edit the active field"),
                ("Enter", "Next field / submit message"),
                ("Ctrl+s", "Submit message"),
                ("Ctrl+t", "Toggle theme"),
                ("Esc", "Quit dialog"),
            ],
        ),
        (
            "General",
            &[
                ("t", "Toggle light/dark theme"),
                ("r", "Show resume location"),
                ("?", "Show this help"),
                ("q", "Quit"),
                ("Ctrl+c", "Quit immediately"),
            ],
        ),
        (
            "Help",
            &[("j / k", "Scroll"), ("q / Esc / ?", "Close")],
        ),
    ];

    let mut lines = Vec::new();
    for (title, shortcuts) in sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  > {}", title),
            palette.prompt().add_modifier(Modifier::BOLD),
        )));
        for (key, description) in shortcuts {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:14}", key),
                    Style::default()
                        .fg(palette.heading)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(description.to_string(), Style::default().fg(palette.text)),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_and_close() {
        let mut dialog = HelpDialog::default();
        dialog
            .handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(dialog.scroll_offset, 1);

        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
        assert_eq!(dialog.scroll_offset, 0);
    }

    #[test]
    fn test_help_mentions_every_section() {
        let text: String = build_help_content(&Palette::dark())
            .iter()
            .map(|l| l.to_string())
            .collect();
        for section in ["Navigation", "Projects", "Contact", "General"] {
            assert!(text.contains(section));
        }
    }
}
