//! Navigation menu for compact terminals
//!
//! Stands in for the tab labels when the header is too narrow to show them.

use crate::action::Action;
use crate::component::Component;
use crate::components::theme::Palette;
use crate::model::Tab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct MenuDialog {
    pub palette: Palette,
    list_state: ListState,
}

impl Default for MenuDialog {
    fn default() -> Self {
        Self {
            palette: Palette::dark(),
            list_state: ListState::default(),
        }
    }
}

impl MenuDialog {
    /// Draw the menu sliding in from the right edge
    pub fn draw_with_selection(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        selected_index: usize,
        active_tab: Tab,
    ) -> Result<()> {
        let palette = self.palette;
        let width = area.width.min(24);
        let menu_area = Rect::new(area.right() - width, area.y, width, area.height);

        frame.render_widget(Clear, menu_area);

        let items: Vec<ListItem> = Tab::all()
            .into_iter()
            .map(|tab| {
                let style = if tab == active_tab {
                    palette.prompt().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text)
                };
                ListItem::new(Line::from(Span::styled(tab.label(), style)))
            })
            .collect();

        let list = List::new(items)
            .style(palette.panel())
            .block(
                Block::default()
                    .borders(Borders::LEFT)
                    .border_style(Style::default().fg(palette.accent))
                    .title(" menu ")
                    .title_style(palette.prompt()),
            )
            .highlight_style(palette.button())
            .highlight_symbol("> ");

        self.list_state.select(Some(selected_index));
        frame.render_stateful_widget(list, menu_area, &mut self.list_state);
        Ok(())
    }
}

impl Component for MenuDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ConfirmModal),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char(c) => c.to_digit(10).and_then(Tab::from_number).map(Action::SelectTab),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let selected = self.list_state.selected().unwrap_or(0);
        self.draw_with_selection(frame, area, selected, Tab::About)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(menu: &mut MenuDialog, code: KeyCode) -> Option<Action> {
        menu.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_menu_keys() {
        let mut menu = MenuDialog::default();
        assert_eq!(press(&mut menu, KeyCode::Down), Some(Action::ModalDown));
        assert_eq!(press(&mut menu, KeyCode::Enter), Some(Action::ConfirmModal));
        assert_eq!(press(&mut menu, KeyCode::Esc), Some(Action::CloseModal));
        assert_eq!(
            press(&mut menu, KeyCode::Char('3')),
            Some(Action::SelectTab(Tab::Projects))
        );
        assert_eq!(press(&mut menu, KeyCode::Char('x')), None);
    }
}
