//! Home component - Main application screen
//!
//! Header with tab labels, the active tab's panel, a status line and the
//! footer. Owns the view state and the clickable regions of the last frame.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_main_layout, clip, is_compact};
use crate::components::theme::Palette;
use crate::components::{about, contact, projects, skills};
use crate::model::{Profile, Submission, Tab, ThemeMode, ViewState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Hit Map
// ═══════════════════════════════════════════════════════════════════════════════

/// Clickable regions recorded while drawing, checked against mouse events
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn add(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// Action of the topmost region under the pointer
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| action.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeComponent {
    pub view: ViewState,
    pub hit_map: HitMap,
}

impl HomeComponent {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            hit_map: HitMap::default(),
        }
    }

    /// Keys on the contact tab mostly go into the form
    fn contact_key_event(key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('s') if ctrl => Some(Action::ContactSubmit),
            KeyCode::Char('t') if ctrl => Some(Action::ToggleTheme),
            KeyCode::Char(c) if !ctrl && !alt => Some(Action::ContactInput(c)),
            KeyCode::Backspace => Some(Action::ContactBackspace),
            KeyCode::Enter => Some(Action::ContactCommit),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let active_tab = self.view.active_tab();
        if active_tab == Tab::Contact {
            return Ok(Self::contact_key_event(key));
        }

        let action = match key.code {
            // Navigation
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextTab),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='4') => c
                .to_digit(10)
                .and_then(Tab::from_number)
                .map(Action::SelectTab),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),

            // Tab-specific confirm
            KeyCode::Enter | KeyCode::Char(' ') => match active_tab {
                Tab::Projects => Some(Action::ToggleProject),
                Tab::About => Some(Action::ShowResume),
                _ => None,
            },

            // Presentation
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('r') => Some(Action::ShowResume),

            // Modals
            KeyCode::Char('m') => Some(Action::OpenMenu),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                Some(Action::PointerMoved(mouse.column, mouse.row))
            }
            MouseEventKind::Down(MouseButton::Left) => self.hit_map.hit(mouse.column, mouse.row),
            MouseEventKind::ScrollDown if self.view.active_tab() == Tab::Projects => {
                Some(Action::NextItem)
            }
            MouseEventKind::ScrollUp if self.view.active_tab() == Tab::Projects => {
                Some(Action::PrevItem)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub profile: &'a Profile,
    pub palette: Palette,
    pub theme_mode: ThemeMode,
    /// Blink phase of the typing caret
    pub caret_on: bool,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
    pub last_submission: Option<&'a Submission>,
}

impl HomeRenderContext<'_> {
    pub fn caret(&self) -> Span<'static> {
        let symbol = if self.caret_on { "|" } else { " " };
        Span::styled(symbol, self.palette.prompt())
    }

    /// `C:\Users\Developer> <command>` line at the top of each panel
    pub fn prompt_line(&self, tab: Tab) -> Line<'static> {
        Line::from(Span::styled(
            format!("C:\\Users\\Developer> {}", tab.command()),
            self.palette.prompt(),
        ))
    }

    /// Opaque panel block drawn over the particle field
    pub fn panel_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.muted))
            .style(self.palette.panel())
    }
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);
    home.hit_map.clear();

    render_header(frame, layout.header, home, ctx);

    let hits = &mut home.hit_map;
    match home.view.active_tab() {
        Tab::About => about::draw_about(frame, layout.content, &home.view, ctx, hits),
        Tab::Skills => skills::draw_skills(frame, layout.content, &home.view, ctx),
        Tab::Projects => projects::draw_projects(frame, layout.content, &home.view, ctx, hits),
        Tab::Contact => contact::draw_contact(frame, layout.content, &home.view, ctx, hits),
    }

    render_status_bar(frame, layout.status, ctx);
    if let Some(footer) = layout.footer {
        render_footer(frame, footer, ctx);
    }
    Ok(())
}

fn render_header(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let palette = ctx.palette;
    let row = area.y + area.height / 2;
    let active_tab = home.view.active_tab();

    if is_compact(area) {
        let label = "≡ menu";
        let rect = Rect::new(area.x + 1, row, label.width() as u16, 1);
        if let Some(rect) = clip(rect, area) {
            frame.render_widget(Paragraph::new(Span::styled(label, palette.prompt())), rect);
            home.hit_map.add(rect, Action::OpenMenu);
        }
    } else {
        let mut x = area.x + 2;
        for tab in Tab::all() {
            let label = format!(" {} ", tab.label());
            let width = label.width() as u16;
            if x + width > area.right() {
                break;
            }
            let style = if tab == active_tab {
                palette.button()
            } else {
                Style::default().fg(palette.text)
            };
            if let Some(rect) = clip(Rect::new(x, row, width, 1), area) {
                frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
                home.hit_map.add(rect, Action::SelectTab(tab));
            }
            x += width + 2;
        }
    }

    // Theme switch on the right: ☀ [ ●] ☾
    let knob = match ctx.theme_mode {
        ThemeMode::Light => "[● ]",
        ThemeMode::Dark => "[ ●]",
    };
    let switch = Line::from(vec![
        Span::styled("☀ ", Style::default().fg(palette.text)),
        Span::styled(knob, palette.prompt().add_modifier(Modifier::BOLD)),
        Span::styled(" ☾", Style::default().fg(palette.text)),
    ]);
    let switch_width = switch.width() as u16;
    if area.width > switch_width + 2 {
        let rect = Rect::new(area.right() - switch_width - 2, row, switch_width, 1);
        if let Some(rect) = clip(rect, area) {
            frame.render_widget(Paragraph::new(switch), rect);
            home.hit_map.add(rect, Action::ToggleTheme);
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let palette = ctx.palette;
    let line = if let Some(error) = ctx.error {
        Line::from(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(palette.error),
        ))
    } else if let Some(status) = ctx.status_message {
        Line::from(Span::styled(format!(" {} ", status), palette.prompt()))
    } else {
        Line::from(vec![
            Span::styled(" ? ", palette.prompt().add_modifier(Modifier::BOLD)),
            Span::styled("help  ", Style::default().fg(palette.muted)),
            Span::styled(" Tab ", palette.prompt().add_modifier(Modifier::BOLD)),
            Span::styled("next tab  ", Style::default().fg(palette.muted)),
            Span::styled(" t ", palette.prompt().add_modifier(Modifier::BOLD)),
            Span::styled("theme  ", Style::default().fg(palette.muted)),
            Span::styled(" q ", palette.prompt().add_modifier(Modifier::BOLD)),
            Span::styled("quit", Style::default().fg(palette.muted)),
        ])
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let palette = ctx.palette;
    let profile = ctx.profile;
    let muted = Style::default().fg(palette.text);

    let mut socials = Vec::new();
    for (i, link) in profile.socials.iter().enumerate() {
        if i > 0 {
            socials.push(Span::styled("  ·  ", Style::default().fg(palette.muted)));
        }
        socials.push(Span::styled(
            link.label.clone(),
            palette.prompt().add_modifier(Modifier::BOLD),
        ));
        socials.push(Span::styled(format!(" {}", display_url(&link.url)), muted));
    }
    let mut socials_line = Line::from(socials);
    if socials_line.width() > usize::from(area.width) {
        // Not enough room for URLs: labels only
        socials_line = Line::from(
            profile
                .socials
                .iter()
                .map(|l| Span::styled(format!(" {} ", l.label), palette.prompt()))
                .collect::<Vec<_>>(),
        );
    }

    let lines = vec![
        Line::from(Span::styled(
            format!(
                "© {} {}. All rights reserved.",
                profile.copyright_year, profile.owner
            ),
            muted,
        )),
        Line::from(Span::styled(profile.email.clone(), muted)),
        socials_line,
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// URL without its scheme, for compact display
fn display_url(url: &str) -> &str {
    ["https://", "http://", "mailto:"]
        .iter()
        .find_map(|scheme| url.strip_prefix(scheme))
        .unwrap_or(url)
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reveal::RevealTiming;

    fn home(tab: Tab) -> HomeComponent {
        let mut view = ViewState::new(&Profile::default(), RevealTiming::default());
        view.select_tab(tab);
        HomeComponent::new(view)
    }

    fn press(home: &mut HomeComponent, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        home.handle_key_event(KeyEvent::new(code, modifiers)).unwrap()
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let mut home = home(Tab::About);
        assert_eq!(
            press(&mut home, KeyCode::Char('2'), KeyModifiers::NONE),
            Some(Action::SelectTab(Tab::Skills))
        );
        assert_eq!(
            press(&mut home, KeyCode::Char('4'), KeyModifiers::NONE),
            Some(Action::SelectTab(Tab::Contact))
        );
    }

    #[test]
    fn test_enter_depends_on_tab() {
        let mut projects = home(Tab::Projects);
        assert_eq!(
            press(&mut projects, KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::ToggleProject)
        );
        let mut skills = home(Tab::Skills);
        assert_eq!(press(&mut skills, KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_contact_tab_captures_typing() {
        let mut home = home(Tab::Contact);
        assert_eq!(
            press(&mut home, KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::ContactInput('q'))
        );
        assert_eq!(
            press(&mut home, KeyCode::Char('J'), KeyModifiers::SHIFT),
            Some(Action::ContactInput('J'))
        );
        assert_eq!(
            press(&mut home, KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::ContactCommit)
        );
        assert_eq!(
            press(&mut home, KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(Action::ContactSubmit)
        );
        assert_eq!(
            press(&mut home, KeyCode::Tab, KeyModifiers::NONE),
            Some(Action::NextTab)
        );
    }

    #[test]
    fn test_hit_map_prefers_topmost() {
        let mut hits = HitMap::default();
        hits.add(Rect::new(0, 0, 10, 10), Action::OpenMenu);
        hits.add(Rect::new(2, 2, 2, 1), Action::ToggleProject);
        assert_eq!(hits.hit(2, 2), Some(Action::ToggleProject));
        assert_eq!(hits.hit(5, 5), Some(Action::OpenMenu));
        assert_eq!(hits.hit(20, 5), None);

        hits.add(Rect::new(0, 0, 0, 5), Action::OpenHelp);
        hits.clear();
        assert_eq!(hits.hit(5, 5), None);
    }

    #[test]
    fn test_display_url_strips_scheme() {
        assert_eq!(display_url("https://github.com/jane/"), "github.com/jane");
        assert_eq!(display_url("mailto:jane@example.com"), "jane@example.com");
        assert_eq!(display_url("example.org"), "example.org");
    }
}
