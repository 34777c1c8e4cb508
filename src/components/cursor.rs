//! Cursor follower - a highlighted cell easing toward the mouse pointer

use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    Frame,
};
use std::time::Duration;

/// Time constant of the easing, in seconds
const FOLLOW_SECS: f32 = 0.1;

pub struct CursorFollower {
    target: Option<(f32, f32)>,
    position: (f32, f32),
    visible: bool,
    hovering: bool,
    pub color: Color,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            target: None,
            position: (0.0, 0.0),
            visible: true,
            hovering: false,
            color: Color::Cyan,
        }
    }

    /// New pointer location. The first one is jumped to directly.
    pub fn move_to(&mut self, column: u16, row: u16) {
        let target = (f32::from(column), f32::from(row));
        if self.target.is_none() {
            self.position = target;
        }
        self.target = Some(target);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn advance(&mut self, elapsed: Duration) {
        let Some(target) = self.target else {
            return;
        };
        let alpha = 1.0 - (-elapsed.as_secs_f32() / FOLLOW_SECS).exp();
        self.position.0 += (target.0 - self.position.0) * alpha;
        self.position.1 += (target.1 - self.position.1) * alpha;
    }

    /// Cell currently drawn, if any
    pub fn cell(&self) -> Option<Position> {
        if !self.visible {
            return None;
        }
        self.target?;
        Some(Position::new(
            self.position.0.round().max(0.0) as u16,
            self.position.1.round().max(0.0) as u16,
        ))
    }
}

impl Component for CursorFollower {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(center) = self.cell() else {
            return Ok(());
        };

        // Hovering widens the follower to three cells
        let span: &[i32] = if self.is_hovering() { &[-1, 0, 1] } else { &[0] };
        let buf = frame.buffer_mut();
        for dx in span {
            let x = i32::from(center.x) + dx;
            let Ok(x) = u16::try_from(x) else {
                continue;
            };
            let position = Position::new(x, center.y);
            if !area.contains(position) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_style(
                    Style::default()
                        .fg(self.color)
                        .add_modifier(Modifier::REVERSED),
                );
            }
        }
        Ok(())
    }
}
