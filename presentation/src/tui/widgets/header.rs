//! Header widget: the country search box

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.mode == InputMode::Search;

        let line = if self.state.search_input.is_empty() && !focused {
            Line::from(Span::styled(
                "Press / to name a nation...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![
                Span::styled("» ", Style::default().fg(Color::Green)),
                Span::styled(
                    self.state.search_input.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if focused {
                spans.push(Span::styled("▏", Style::default().fg(Color::Green)));
            }
            Line::from(spans)
        };

        let border = if focused { Color::Green } else { Color::White };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" NationSense ")
            .border_style(Style::default().fg(border));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
