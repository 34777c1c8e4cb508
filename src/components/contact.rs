//! Contact tab - the stepped name/email/message form

use crate::action::Action;
use crate::components::home::{HitMap, HomeRenderContext};
use crate::components::layout::wrap_text;
use crate::model::{ContactForm, Stage, Tab, ViewState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const SUBMIT_LABEL: &str = "[ Submit ]";

/// Form lines; the second value is the line index of the Submit button
pub fn form_lines(
    form: &ContactForm,
    width: u16,
    ctx: &HomeRenderContext,
) -> (Vec<Line<'static>>, Option<usize>) {
    let palette = ctx.palette;
    let mut lines = vec![ctx.prompt_line(Tab::Contact), Line::from("")];

    for stage in Stage::all() {
        if !form.is_visible(stage) {
            continue;
        }
        let editable = form.is_editable(stage);
        let value_style = if editable {
            Style::default().fg(palette.heading)
        } else {
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM)
        };

        lines.push(Line::from(Span::styled(
            format!("> {}", stage.prompt()),
            palette.prompt(),
        )));

        let rows = wrap_text(form.field(stage), width.saturating_sub(3));
        let last = rows.len() - 1;
        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 { "$ " } else { "  " };
            let mut line = Line::from(vec![
                Span::styled(lead, palette.prompt()),
                Span::styled(row, value_style),
            ]);
            if editable && i == last {
                line.push_span(ctx.caret());
            }
            lines.push(line);
        }
        lines.push(Line::from(""));
    }

    let submit_line = if form.stage() == Stage::Message {
        lines.push(Line::from(Span::styled(SUBMIT_LABEL, palette.button())));
        Some(lines.len() - 1)
    } else {
        None
    };

    if let Some(submission) = ctx.last_submission {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "✓ message from {} logged locally at {}",
                submission.name,
                submission.submitted_at.format("%H:%M:%S")
            ),
            Style::default().fg(palette.muted),
        )));
    }

    (lines, submit_line)
}

pub fn draw_contact(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    ctx: &HomeRenderContext,
    hits: &mut HitMap,
) {
    frame.render_widget(Clear, area);
    let block = ctx.panel_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2);
    let text_area = Rect {
        x: inner.x + 1,
        width,
        ..inner
    };
    let (lines, submit_line) = form_lines(view.contact(), width, ctx);
    frame.render_widget(Paragraph::new(lines), text_area);

    if let Some(offset) = submit_line.and_then(|l| u16::try_from(l).ok()) {
        if offset < text_area.height {
            let button = Rect::new(
                text_area.x,
                text_area.y + offset,
                (SUBMIT_LABEL.len() as u16).min(text_area.width),
                1,
            );
            hits.add(button, Action::ContactSubmit);
        }
    }
}
