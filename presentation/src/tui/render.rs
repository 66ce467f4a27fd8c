//! TUI rendering: picks the widgets for the current phase and view

use super::mode::InputMode;
use super::state::TuiState;
use super::widgets::{
    MainLayout,
    chat::{ChatInputWidget, TranscriptWidget},
    header::HeaderWidget,
    help::HelpWidget,
    insight::InsightWidget,
    nav::NavWidget,
    profile::ProfileWidget,
    status::{ErrorWidget, LoadingWidget},
    status_bar::StatusBarWidget,
    suggestions::SuggestionsWidget,
    vision::VisionWidget,
};
use nationsense_application::ViewController;
use nationsense_domain::{QueryPhase, ViewMode, messages};
use ratatui::widgets::Clear;

pub(super) fn render(frame: &mut ratatui::Frame, controller: &ViewController, state: &TuiState) {
    let query = controller.query();
    let view = controller.view();
    let ready = query.is_ready();
    let show_input = ready && view == ViewMode::Chat;
    let layout = MainLayout::compute(frame.area(), show_input);

    frame.render_widget(HeaderWidget::new(state), layout.header);
    frame.render_widget(NavWidget::new(view, ready), layout.nav);

    match (query.phase(), query.animal()) {
        (QueryPhase::Ready, Some(profile)) => match view {
            ViewMode::Profile => frame.render_widget(
                ProfileWidget::new(query.country(), profile, state.scroll),
                layout.body,
            ),
            ViewMode::Insight => frame.render_widget(
                InsightWidget::new(
                    profile.name(),
                    controller.insight().state(),
                    state.spinner(),
                    state.scroll,
                ),
                layout.body,
            ),
            ViewMode::Vision => frame.render_widget(
                VisionWidget::new(profile.name(), controller.vision(), state.spinner()),
                layout.body,
            ),
            ViewMode::Chat => frame.render_widget(
                TranscriptWidget::new(
                    profile.name(),
                    controller.chat().transcript(),
                    controller.chat().status(),
                    state.spinner(),
                    state.scroll,
                ),
                layout.body,
            ),
        },
        (QueryPhase::Loading, _) => frame.render_widget(
            LoadingWidget::new(state.spinner(), messages::CONSULTING),
            layout.body,
        ),
        (QueryPhase::Error, _) => frame.render_widget(
            ErrorWidget::new(query.error().unwrap_or(messages::NATION_NOT_FOUND)),
            layout.body,
        ),
        _ => frame.render_widget(SuggestionsWidget::new(state), layout.body),
    }

    if let Some(input_area) = layout.input {
        frame.render_widget(
            ChatInputWidget::new(
                &state.chat_input,
                state.mode == InputMode::Chat,
                controller.chat().can_send(),
            ),
            input_area,
        );
    }

    frame.render_widget(StatusBarWidget::new(state, view), layout.status_bar);

    if state.show_help {
        let help_area = MainLayout::centered_overlay(70, 80, frame.area());
        frame.render_widget(Clear, help_area);
        frame.render_widget(HelpWidget, help_area);
    }
}
