//! Help overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HelpWidget;

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled("Keyboard Shortcuts", heading)),
            Line::from(""),
            Line::from("Normal Mode:"),
            Line::from("  / or i     Name a nation"),
            Line::from("  1-4        Reality / Sixth Sense / Vision / Commune"),
            Line::from("  Tab        Next view (Shift+Tab: previous)"),
            Line::from("  j/k        Scroll"),
            Line::from("  g r s      Generate / reset / save the vision"),
            Line::from("  c, Enter   Speak in the Commune view"),
            Line::from("  ?          Toggle this help"),
            Line::from("  q          Quit"),
            Line::from(""),
            Line::from("Search Mode:"),
            Line::from("  Enter      Search"),
            Line::from("  Tab/Up     Cycle suggestions"),
            Line::from("  Ctrl+U     Clear"),
            Line::from("  Esc        Cancel"),
            Line::from(""),
            Line::from("Commune Mode:"),
            Line::from("  Enter      Send"),
            Line::from("  Esc        Stop typing"),
            Line::from(""),
            Line::from("Ctrl+C quits from any mode."),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
