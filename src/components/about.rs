//! About tab - typed welcome, title and description plus the resume button

use crate::action::Action;
use crate::components::home::{HitMap, HomeRenderContext};
use crate::components::layout::{clip, wrap_text};
use crate::model::view_state::{INTRO_DESCRIPTION, INTRO_TITLE, INTRO_WELCOME};
use crate::model::reveal::Reveal;
use crate::model::{Tab, ViewState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Wrapped lines of the revealed part of `text`, caret on the last line
fn typed_lines(
    text: &str,
    reveal: Option<Reveal>,
    width: u16,
    style: Style,
    ctx: &HomeRenderContext,
) -> Vec<Line<'static>> {
    let shown = reveal.map(|r| r.prefix(text)).unwrap_or("");
    let mut lines: Vec<Line<'static>> = wrap_text(shown, width.saturating_sub(1))
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(ctx.caret());
    }
    lines
}

pub fn draw_about(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    ctx: &HomeRenderContext,
    hits: &mut HitMap,
) {
    let palette = ctx.palette;
    let profile = ctx.profile;
    let intro = view.intro();
    let phase = |index| intro.phase(index).map(|p| p.reveal);

    frame.render_widget(Clear, area);
    let block = ctx.panel_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let width = chunks[0].width.saturating_sub(2);

    let mut lines = vec![ctx.prompt_line(Tab::About)];
    lines.extend(typed_lines(
        &profile.welcome,
        phase(INTRO_WELCOME),
        width,
        Style::default().fg(palette.text),
        ctx,
    ));
    lines.push(Line::from(""));
    lines.extend(typed_lines(
        &profile.title,
        phase(INTRO_TITLE),
        width,
        palette.title(),
        ctx,
    ));
    lines.push(Line::from(""));
    lines.extend(typed_lines(
        &profile.description,
        phase(INTRO_DESCRIPTION),
        width,
        Style::default().fg(palette.text),
        ctx,
    ));

    let text_area = Rect {
        x: chunks[0].x + 1,
        width,
        ..chunks[0]
    };
    frame.render_widget(Paragraph::new(lines), text_area);

    // Resume button, centered on the last row
    let label = format!("[ {} ]", profile.resume.label);
    let label_width = (label.width() as u16).min(chunks[1].width);
    let button = Rect::new(
        chunks[1].x + (chunks[1].width - label_width) / 2,
        chunks[1].y,
        label_width,
        1,
    );
    if let Some(button) = clip(button, chunks[1]) {
        frame.render_widget(
            Paragraph::new(Span::styled(label, palette.button())).alignment(Alignment::Center),
            button,
        );
        hits.add(button, Action::ShowResume);
    }
}
