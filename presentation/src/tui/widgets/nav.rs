//! View navigation bar

use nationsense_domain::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

pub struct NavWidget {
    current: ViewMode,
    /// Views are locked until a profile is ready
    enabled: bool,
}

impl NavWidget {
    pub fn new(current: ViewMode, enabled: bool) -> Self {
        Self { current, enabled }
    }
}

impl Widget for NavWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = ViewMode::ALL
            .iter()
            .map(|v| Line::from(format!("{} {}", v.index() + 1, v.label())))
            .collect();

        let (style, highlight) = if self.enabled {
            (
                Style::default().fg(Color::Gray),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            let locked = Style::default().fg(Color::DarkGray);
            (locked, locked)
        };

        Tabs::new(titles)
            .select(self.current.index())
            .style(style)
            .highlight_style(highlight)
            .divider(" ")
            .render(area, buf);
    }
}
