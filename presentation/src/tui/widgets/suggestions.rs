//! Empty-state widget listing a few nations to try

use crate::tui::state::TuiState;
use nationsense_domain::INITIAL_SUGGESTIONS;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SuggestionsWidget<'a> {
    state: &'a TuiState,
}

impl<'a> SuggestionsWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for SuggestionsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Every nation has a spirit animal.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Try one of these (Tab cycles them in the search box):"),
            Line::from(""),
        ];
        for (i, name) in INITIAL_SUGGESTIONS.iter().enumerate() {
            let style = if self.state.suggestion_index == Some(i) {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(format!("  {}", name), style)));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Discover "))
            .render(area, buf);
    }
}
