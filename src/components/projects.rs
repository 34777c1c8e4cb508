//! Projects tab - revealed project folders, one of which may be open

use crate::action::Action;
use crate::components::home::{HitMap, HomeRenderContext};
use crate::components::layout::wrap_text;
use crate::model::{Project, Tab, ViewState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

const DETAIL_INDENT: &str = "    ";

/// Lines of an open project's detail view
fn detail_lines(project: &Project, width: u16, ctx: &HomeRenderContext) -> Vec<Line<'static>> {
    let palette = ctx.palette;
    let wrap_width = width.saturating_sub(DETAIL_INDENT.len() as u16);
    let mut lines = Vec::new();

    if !project.image.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled(
                format!("[img] {}", project.image),
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
    for text in [&project.description, &project.details] {
        if text.is_empty() {
            continue;
        }
        for row in wrap_text(text, wrap_width) {
            lines.push(Line::from(vec![
                Span::raw(DETAIL_INDENT),
                Span::styled(row, Style::default().fg(palette.text)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines
}

/// All panel lines, plus the line index of each revealed project row
pub fn project_lines(
    view: &ViewState,
    width: u16,
    ctx: &HomeRenderContext,
) -> (Vec<Line<'static>>, Vec<usize>) {
    let palette = ctx.palette;
    let projects = &ctx.profile.projects;
    let shown = view.projects_shown().min(projects.len());

    let mut lines = vec![ctx.prompt_line(Tab::Projects), Line::from("")];
    let mut rows = Vec::with_capacity(shown);

    for (index, project) in projects[..shown].iter().enumerate() {
        let open = view.selected_project() == Some(index);
        let folder = if open { "[-]" } else { "[+]" };
        let name_style = if index == view.project_cursor() {
            palette.button()
        } else {
            Style::default().fg(palette.text)
        };

        rows.push(lines.len());
        lines.push(Line::from(vec![
            Span::styled("> ", palette.prompt()),
            Span::styled(format!("{} ", folder), Style::default().fg(palette.accent)),
            Span::styled(project.name.clone(), name_style),
        ]));

        if open {
            lines.extend(detail_lines(project, width, ctx));
        }
    }

    if shown < projects.len() {
        lines.push(Line::from(ctx.caret()));
    }
    (lines, rows)
}

pub fn draw_projects(
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
    let (lines, rows) = project_lines(view, width, ctx);
    frame.render_widget(Paragraph::new(lines), text_area);

    for (project, line_index) in ctx.profile.projects.iter().zip(rows) {
        let Ok(offset) = u16::try_from(line_index) else {
            break;
        };
        if offset >= text_area.height {
            break;
        }
        let row = Rect::new(text_area.x, text_area.y + offset, text_area.width, 1);
        hits.add(row, Action::ToggleProjectNamed(project.name.clone()));
    }
}
