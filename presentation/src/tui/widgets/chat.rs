//! Commune view: the transcript and the message box

use super::wrapped_height;
use nationsense_application::ChatStatus;
use nationsense_domain::{ChatRole, Transcript};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Transcript, anchored to the newest message
pub struct TranscriptWidget<'a> {
    animal_name: &'a str,
    transcript: &'a Transcript,
    status: &'a ChatStatus,
    spinner: &'a str,
    /// Lines scrolled back from the newest message
    scroll: u16,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(
        animal_name: &'a str,
        transcript: &'a Transcript,
        status: &'a ChatStatus,
        spinner: &'a str,
        scroll: u16,
    ) -> Self {
        Self {
            animal_name,
            transcript,
            status,
            spinner,
            scroll,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for message in self.transcript.messages() {
            let (speaker, color) = match message.role() {
                ChatRole::User => ("You", Color::Cyan),
                ChatRole::Model => (self.animal_name, Color::Yellow),
            };
            let mut spans = vec![Span::styled(
                format!("{}: ", speaker),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            if message.is_streaming() && message.text().is_empty() {
                spans.push(Span::styled(self.spinner, Style::default().fg(color)));
            } else {
                spans.push(Span::raw(message.text()));
                if message.is_streaming() {
                    spans.push(Span::styled("▌", Style::default().fg(color)));
                }
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        match self.status {
            ChatStatus::Opening => lines.push(Line::from(Span::styled(
                format!("{} Opening the channel...", self.spinner),
                Style::default().fg(Color::DarkGray),
            ))),
            ChatStatus::Unavailable(reason) => {
                lines.push(Line::from(Span::styled(
                    reason.as_str(),
                    Style::default().fg(Color::Red),
                )));
                lines.push(Line::from(Span::styled(
                    "Leave and return to this view to try again.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ChatStatus::Closed | ChatStatus::Ready | ChatStatus::Sending => {}
        }
        lines
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let inner_height = area.height.saturating_sub(2);
        let total = wrapped_height(&lines, area.width.saturating_sub(2));
        let bottom = total.saturating_sub(inner_height);
        let offset = bottom.saturating_sub(self.scroll);

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Commune · {} ", self.animal_name))
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}

/// Message box shown under the transcript
pub struct ChatInputWidget<'a> {
    input: &'a str,
    focused: bool,
    can_send: bool,
}

impl<'a> ChatInputWidget<'a> {
    pub fn new(input: &'a str, focused: bool, can_send: bool) -> Self {
        Self {
            input,
            focused,
            can_send,
        }
    }
}

impl<'a> Widget for ChatInputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Press c to speak to the spirit...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::raw(self.input)];
            if self.focused {
                spans.push(Span::styled("▏", Style::default().fg(Color::Magenta)));
            }
            Line::from(spans)
        };

        let border = match (self.focused, self.can_send) {
            (true, true) => Color::Magenta,
            (true, false) => Color::DarkGray,
            (false, _) => Color::White,
        };
        let title = if self.can_send { " Speak " } else { " Listening " };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }
}
