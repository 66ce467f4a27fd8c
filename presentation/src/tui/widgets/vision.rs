//! Vision view
//!
//! Terminals cannot show the generated image, so the view reports what
//! was manifested and offers to save it.

use nationsense_application::{VisionPanel, VisionStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct VisionWidget<'a> {
    animal_name: &'a str,
    panel: &'a VisionPanel,
    spinner: &'a str,
}

impl<'a> VisionWidget<'a> {
    pub fn new(animal_name: &'a str, panel: &'a VisionPanel, spinner: &'a str) -> Self {
        Self {
            animal_name,
            panel,
            spinner,
        }
    }
}

fn hint(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

impl<'a> Widget for VisionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from("")];

        if self.panel.status() == VisionStatus::Generating {
            lines.push(Line::from(vec![
                Span::styled(self.spinner, Style::default().fg(Color::Cyan)),
                Span::styled(
                    " Summoning a vision...",
                    Style::default().fg(Color::Cyan),
                ),
            ]));
        } else if let Some(image) = self.panel.image() {
            lines.push(Line::from(Span::styled(
                "A vision has manifested.",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "{} · {:.1} KiB",
                image.mime_type(),
                image.byte_len() as f64 / 1024.0
            )));
            lines.push(Line::from(""));
            lines.push(hint("s save to disk   r dismiss"));
        } else {
            if let Some(error) = self.panel.error() {
                lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
                lines.push(Line::from(""));
            }
            lines.push(Line::from(format!(
                "Summon a vision of the {}.",
                self.animal_name
            )));
            lines.push(Line::from(""));
            lines.push(hint("g generate"));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Vision ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
