//! Skills tab - revealed skills in a one or two column grid

use crate::components::home::HomeRenderContext;
use crate::model::{Skill, Tab, ViewState};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Inner width from which the grid gets a second column
const TWO_COLUMN_WIDTH: u16 = 40;

fn skill_spans(skill: &Skill, column_width: usize, ctx: &HomeRenderContext) -> Vec<Span<'static>> {
    let palette = ctx.palette;
    let glyph = skill.icon.glyph();
    let used = 2 + skill.name.width() + 1 + glyph.width();
    vec![
        Span::styled("> ", palette.prompt()),
        Span::styled(skill.name.clone(), Style::default().fg(palette.text)),
        Span::raw(" "),
        Span::styled(glyph, Style::default().fg(palette.muted)),
        Span::raw(" ".repeat(column_width.saturating_sub(used))),
    ]
}

/// Grid rows for the first `shown` skills
pub fn skill_rows(
    skills: &[Skill],
    shown: usize,
    inner_width: u16,
    ctx: &HomeRenderContext,
) -> Vec<Line<'static>> {
    let columns = if inner_width >= TWO_COLUMN_WIDTH { 2 } else { 1 };
    let column_width = usize::from(inner_width) / columns;

    skills[..shown.min(skills.len())]
        .chunks(columns)
        .map(|row| {
            Line::from(
                row.iter()
                    .flat_map(|skill| skill_spans(skill, column_width, ctx))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

pub fn draw_skills(frame: &mut Frame, area: Rect, view: &ViewState, ctx: &HomeRenderContext) {
    let skills = &ctx.profile.skills;
    let shown = view.skills_shown();

    frame.render_widget(Clear, area);
    let block = ctx.panel_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(2);
    let mut lines = vec![ctx.prompt_line(Tab::Skills), Line::from("")];
    lines.extend(skill_rows(skills, shown, width, ctx));
    if shown < skills.len() {
        lines.push(Line::from(ctx.caret()));
    }

    let text_area = Rect {
        x: inner.x + 1,
        width,
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), text_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::theme::Palette;
    use crate::model::{Profile, ThemeMode};

    fn ctx(profile: &Profile) -> HomeRenderContext<'_> {
        HomeRenderContext {
            profile,
            palette: Palette::dark(),
            theme_mode: ThemeMode::Dark,
            caret_on: true,
            error: None,
            status_message: None,
            last_submission: None,
        }
    }

    #[test]
    fn test_grid_uses_two_columns_when_wide() {
        let profile = Profile::default();
        let ctx = ctx(&profile);
        let rows = skill_rows(&profile.skills, 9, 60, &ctx);
        assert_eq!(rows.len(), 5);
        assert!(rows[0].to_string().contains("HTML"));
        assert!(rows[0].to_string().contains("CSS"));
    }

    #[test]
    fn test_grid_single_column_when_narrow() {
        let profile = Profile::default();
        let ctx = ctx(&profile);
        let rows = skill_rows(&profile.skills, 3, 30, &ctx);
        assert_eq!(rows.len(), 3);
        assert!(rows[2].to_string().contains("JavaScript"));
    }

    #[test]
    fn test_only_revealed_skills_rendered() {
        let profile = Profile::default();
        let ctx = ctx(&profile);
        assert!(skill_rows(&profile.skills, 0, 60, &ctx).is_empty());
        let rows = skill_rows(&profile.skills, 1, 60, &ctx);
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].to_string().contains("CSS"));
    }
}
