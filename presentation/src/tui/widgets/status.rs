//! Loading and error placeholders for the body

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct LoadingWidget<'a> {
    spinner: &'a str,
    text: &'a str,
}

impl<'a> LoadingWidget<'a> {
    pub fn new(spinner: &'a str, text: &'a str) -> Self {
        Self { spinner, text }
    }
}

impl<'a> Widget for LoadingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.spinner, Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(
                self.text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(vec![Line::from(""), line])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}

pub struct ErrorWidget<'a> {
    message: &'a str,
}

impl<'a> ErrorWidget<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl<'a> Widget for ErrorWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.message, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                "Press / to search again.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
            .render(area, buf);
    }
}
