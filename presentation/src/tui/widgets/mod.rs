//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Search (3) ─────────────────────────────────────┐
//! ├── Views (1) ──────────────────────────────────────┤
//! ├── Body (flex) ────────────────────────────────────┤
//! ├── Chat input (3, chat view only) ─────────────────┤
//! └── StatusBar (1) ──────────────────────────────────┘

pub mod chat;
pub mod header;
pub mod help;
pub mod insight;
pub mod nav;
pub mod profile;
pub mod status;
pub mod status_bar;
pub mod suggestions;
pub mod vision;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions computed from the terminal area
pub struct MainLayout {
    pub header: Rect,
    pub nav: Rect,
    pub body: Rect,
    pub input: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, show_input: bool) -> Self {
        let input_height = if show_input { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(input_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            nav: chunks[1],
            body: chunks[2],
            input: show_input.then_some(chunks[3]),
            status_bar: chunks[4],
        }
    }

    /// Centered rect for overlays (help)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Number of rows `lines` occupy when wrapped at `width`
pub(crate) fn wrapped_height(lines: &[ratatui::text::Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_layout_without_input() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.nav.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert!(layout.input.is_none());
        assert_eq!(layout.body.height, 19);
    }

    #[test]
    fn test_layout_with_input() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.input.map(|r| r.height), Some(3));
        assert_eq!(layout.body.height, 16);
    }

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 4), 3 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 0), 10 + 1 + 3);
    }
}
