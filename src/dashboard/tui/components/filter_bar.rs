use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::dashboard::filter::FeeType;
use crate::dashboard::state::DashboardState;
use crate::dashboard::text::truncate_text;
use crate::dashboard::tui::theme::{
    category_badge_style, BORDER_STYLE, DIM_STYLE, INPUT_STYLE, KEY_STYLE, LABEL_STYLE, VALUE_STYLE,
};

const MAX_SEARCH_DISPLAY: usize = 32;

pub(crate) struct FilterBarComponent;

impl Component for FilterBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let filter = state.filter();
        let all = t!("filter_all").to_string();

        let category = match filter.category.as_deref() {
            Some(category) => Span::styled(format!(" {} ", category), category_badge_style(category)),
            None => Span::styled(all.clone(), *VALUE_STYLE),
        };

        let fee = match filter.fee {
            Some(FeeType::Free) => t!("fee_free").to_string(),
            Some(FeeType::Paid) => t!("fee_paid").to_string(),
            None => all,
        };

        let search = if state.search_editing() {
            Span::styled(
                format!("{}▏", truncate_text(&filter.search, MAX_SEARCH_DISPLAY)),
                *INPUT_STYLE,
            )
        } else if filter.search.is_empty() {
            Span::styled("-", *DIM_STYLE)
        } else {
            Span::styled(truncate_text(&filter.search, MAX_SEARCH_DISPLAY), *VALUE_STYLE)
        };

        let line = Line::from(vec![
            Span::styled("[c] ", *KEY_STYLE),
            Span::styled(format!("{}: ", t!("filter_category")), *LABEL_STYLE),
            category,
            Span::styled("  │  ", *DIM_STYLE),
            Span::styled("[f] ", *KEY_STYLE),
            Span::styled(format!("{}: ", t!("filter_fee")), *LABEL_STYLE),
            Span::styled(fee, *VALUE_STYLE),
            Span::styled("  │  ", *DIM_STYLE),
            Span::styled("[/] ", *KEY_STYLE),
            Span::styled(format!("{}: ", t!("filter_search")), *LABEL_STYLE),
            search,
        ]);

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(*BORDER_STYLE),
        );
        f.render_widget(widget, area);
    }
}
