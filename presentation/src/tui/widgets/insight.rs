//! Sixth Sense view: the cultural narrative

use nationsense_application::InsightState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct InsightWidget<'a> {
    animal_name: &'a str,
    state: &'a InsightState,
    spinner: &'a str,
    scroll: u16,
}

impl<'a> InsightWidget<'a> {
    pub fn new(animal_name: &'a str, state: &'a InsightState, spinner: &'a str, scroll: u16) -> Self {
        Self {
            animal_name,
            state,
            spinner,
            scroll,
        }
    }
}

impl<'a> Widget for InsightWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = match self.state {
            InsightState::Idle | InsightState::Fetching => vec![Line::from(vec![
                Span::styled(self.spinner, Style::default().fg(Color::Magenta)),
                Span::styled(
                    " Listening to the spirits...",
                    Style::default().fg(Color::Magenta),
                ),
            ])],
            InsightState::Shown(text) => text.lines().map(Line::from).collect(),
            InsightState::Degraded(text) => vec![Line::from(Span::styled(
                text.as_str(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Sixth Sense · {} ", self.animal_name))
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }
}
