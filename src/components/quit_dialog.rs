//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
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

/// Quit confirmation dialog
pub struct QuitDialog {
    pub palette: Palette,
}

impl Default for QuitDialog {
    fn default() -> Self {
        Self {
            palette: Palette::dark(),
        }
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let palette = self.palette;
        let popup_area = centered_popup(area, 40, 7);

        frame.render_widget(Clear, popup_area);

        let key_style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled("Close portfolio.exe?", palette.title())),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", key_style),
                Span::raw("Exit  "),
                Span::styled(" n/Esc ", key_style),
                Span::raw("Stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .style(palette.panel())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .title(" exit ")
                    .title_style(palette.prompt().add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
