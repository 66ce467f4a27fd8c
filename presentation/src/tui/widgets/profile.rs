//! Reality view: the factual profile

use nationsense_domain::AnimalProfile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ProfileWidget<'a> {
    country: &'a str,
    profile: &'a AnimalProfile,
    scroll: u16,
}

impl<'a> ProfileWidget<'a> {
    pub fn new(country: &'a str, profile: &'a AnimalProfile, scroll: u16) -> Self {
        Self {
            country,
            profile,
            scroll,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let profile = self.profile;

        let mut lines = vec![Line::from(Span::styled(
            profile.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(scientific) = profile.scientific_name() {
            lines.push(Line::from(Span::styled(
                scientific,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));

        if let Some(habitat) = profile.habitat() {
            lines.push(Line::from(vec![
                Span::styled("Habitat  ", label),
                Span::raw(habitat),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(profile.description()));

        if !profile.traits().is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Traits", label)));
            for t in profile.traits() {
                lines.push(Line::from(vec![
                    Span::styled("  ◆ ", Style::default().fg(Color::Yellow)),
                    Span::raw(t.as_str()),
                ]));
            }
        }
        lines
    }
}

impl<'a> Widget for ProfileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Reality · {} ", self.country);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::crane;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn test_renders_profile_fields() {
        let profile = crane();
        let area = Rect::new(0, 0, 50, 14);
        let mut buf = Buffer::empty(area);
        ProfileWidget::new("Japan", &profile, 0).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Reality · Japan"));
        assert!(text.contains("Red-crowned Crane"));
        assert!(text.contains("Grus japonensis"));
        assert!(text.contains("Wetlands of Hokkaido"));

        let badges: Vec<&str> = text.lines().filter(|line| line.contains('◆')).collect();
        assert_eq!(badges.len(), 3);
        assert!(badges[0].contains("◆ Longevity"));
        assert!(badges[1].contains("◆ Fidelity"));
        assert!(badges[2].contains("◆ Grace"));
    }
}
