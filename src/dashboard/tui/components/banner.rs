use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::dashboard::state::DashboardState;
use crate::dashboard::tui::theme::BANNER_STYLE;

/// Error banner shown after a failed or empty refresh
pub(crate) struct BannerComponent;

impl Component for BannerComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let Some(failure) = state.banner() else {
            return;
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" ⚠ {} ", failure.message()),
                BANNER_STYLE.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", t!("banner_actions")), *BANNER_STYLE),
        ]);

        let widget = Paragraph::new(line).style(*BANNER_STYLE).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(*BANNER_STYLE),
        );
        f.render_widget(widget, area);
    }
}
