use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::dashboard::paginate::ViewMode;
use crate::dashboard::state::{DashboardState, FetchState};
use crate::dashboard::tui::theme::{DIM_STYLE, KEY_STYLE, LOADING_STYLE, TITLE_STYLE, VALUE_STYLE};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let mut spans = vec![
            Span::styled(format!(" {} ", t!("app_title")), *TITLE_STYLE),
            Span::styled("│ ", *DIM_STYLE),
        ];

        match state.fetch_state() {
            FetchState::Loading => {
                let frame = SPINNER[(state.tick() % SPINNER.len() as u64) as usize];
                spans.push(Span::styled(
                    format!("{} {}", frame, t!("status_loading")),
                    *LOADING_STYLE,
                ));
            }
            FetchState::Loaded => {
                spans.push(Span::styled(
                    t!(
                        "status_count",
                        total = state.events().len(),
                        shown = state.filtered_count()
                    )
                    .to_string(),
                    *VALUE_STYLE,
                ));
            }
            FetchState::Error(failure) => {
                spans.push(Span::styled(failure.message(), *DIM_STYLE));
            }
            FetchState::Idle => {
                spans.push(Span::styled(t!("status_idle").to_string(), *DIM_STYLE));
            }
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        let mut mode = vec![Span::styled(mode_label(state.view_mode()), *KEY_STYLE)];
        if state.viewport().is_narrow() && state.selected_mode() == ViewMode::Table {
            mode.push(Span::styled(format!(" ({})", t!("view_forced_grid")), *DIM_STYLE));
        }
        mode.push(Span::raw(" "));

        f.render_widget(
            Paragraph::new(Line::from(mode)).alignment(Alignment::Right),
            area,
        );
    }
}

fn mode_label(mode: ViewMode) -> String {
    match mode {
        ViewMode::Grid => format!("▦ {}", t!("view_grid")),
        ViewMode::Table => format!("☰ {}", t!("view_table")),
    }
}
