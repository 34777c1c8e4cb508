//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Below this width the tab labels collapse into a menu button
pub const COMPACT_WIDTH: u16 = 60;

/// Widest the tab content panel gets
pub const CONTENT_MAX_WIDTH: u16 = 80;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub content: Rect,
    pub status: Rect,
    pub footer: Option<Rect>,
}

pub fn is_compact(area: Rect) -> bool {
    area.width < COMPACT_WIDTH
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// The part of `rect` inside `area`; None when nothing of it is visible
pub fn clip(rect: Rect, area: Rect) -> Option<Rect> {
    let clipped = rect.intersection(area);
    (!clipped.is_empty()).then_some(clipped)
}

/// Horizontally centered column no wider than `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Calculate main screen layout: header, content, status line, footer.
/// The footer is dropped on short terminals.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let show_footer = area.height >= 20;

    let chunks = if show_footer {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
    };

    MainLayout {
        header: chunks[0],
        content: centered_column(chunks[1], CONTENT_MAX_WIDTH),
        status: chunks[2],
        footer: show_footer.then(|| chunks[3]),
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
/// Always returns at least one (possibly empty) line.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            let c_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if current.width() + c_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_footer() {
        let layout = calculate_main_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.footer.map(|f| f.height), Some(3));
        assert_eq!(layout.content.width, CONTENT_MAX_WIDTH);
        assert_eq!(layout.content.x, 20);
    }

    #[test]
    fn test_short_terminal_drops_footer() {
        let layout = calculate_main_layout(Rect::new(0, 0, 50, 12));
        assert!(layout.footer.is_none());
        assert_eq!(layout.content.width, 50);
        assert_eq!(layout.content.height, 8);
    }

    #[test]
    fn test_centered_popup_is_clamped() {
        let popup = centered_popup(Rect::new(0, 0, 20, 10), 40, 7);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.y, 1);
    }

    #[test]
    fn test_clip_keeps_visible_part() {
        let area = Rect::new(0, 0, 4, 3);
        assert_eq!(clip(Rect::new(1, 1, 6, 1), area), Some(Rect::new(1, 1, 3, 1)));
        assert_eq!(clip(Rect::new(1, 3, 6, 1), area), None);
        assert_eq!(clip(Rect::new(4, 0, 2, 1), area), None);
    }

    #[test]
    fn test_compact_threshold() {
        assert!(is_compact(Rect::new(0, 0, 59, 30)));
        assert!(!is_compact(Rect::new(0, 0, 60, 30)));
    }

    #[test]
    fn test_wrap_text_breaks_on_spaces() {
        assert_eq!(
            wrap_text("Crafting beautiful responsive apps", 18),
            vec!["Crafting beautiful", "responsive apps"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_empty_is_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
