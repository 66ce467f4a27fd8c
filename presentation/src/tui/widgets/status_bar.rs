//! Status bar widget: mode indicator, key hints and flash messages

use crate::tui::mode::InputMode;
use crate::tui::state::TuiState;
use nationsense_domain::ViewMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
    view: ViewMode,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState, view: ViewMode) -> Self {
        Self { state, view }
    }

    fn hints(&self) -> &'static str {
        match (self.state.mode, self.view) {
            (InputMode::Search, _) => "Enter:search  Tab:suggest  Esc:cancel",
            (InputMode::Chat, _) => "Enter:send  Esc:done  Ctrl+C:quit",
            (InputMode::Normal, ViewMode::Vision) => "g:generate  r:reset  s:save  1-4:view  ?:help",
            (InputMode::Normal, ViewMode::Chat) => "c:speak  j/k:scroll  1-4:view  ?:help",
            (InputMode::Normal, _) => "/:search  1-4:view  j/k:scroll  ?:help  q:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;
        let mode_text = mode.indicator();
        let mode_style = Style::default()
            .fg(Color::Black)
            .bg(mode.color())
            .add_modifier(Modifier::BOLD);
        let mut left = vec![Span::styled(format!(" {} ", mode_text), mode_style)];
        if self.state.in_flight > 0 {
            left.push(Span::styled(
                format!(" {} {} ", self.state.spinner(), self.state.in_flight),
                bg_style.fg(Color::Green),
            ));
        }
        let left_line = Line::from(left);
        let left_width = left_line.width() as u16;
        buf.set_line(area.x, area.y, &left_line, left_width);

        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.as_str(),
            None => self.hints(),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + left_width {
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
