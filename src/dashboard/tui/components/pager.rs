use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::dashboard::paginate::{page_window, PageItem};
use crate::dashboard::state::DashboardState;
use crate::dashboard::tui::theme::{CURRENT_PAGE_STYLE, DIM_STYLE, KEY_STYLE, LABEL_STYLE};

/// Clickable page strip with prev/next controls
pub(crate) struct PagerComponent;

impl Component for PagerComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let total = state.page_count();
        let current = state.page();
        let radius = state.viewport().page_radius();

        let mut spans = Vec::new();
        let mut hits = Vec::new();
        let mut x = area.x + 1;
        let mut push = |span: Span<'static>, target: Option<usize>| {
            let width = span.width() as u16;
            if let Some(page) = target {
                hits.push((Rect::new(x, area.y, width, 1), page));
            }
            x = x.saturating_add(width);
            spans.push(span);
        };

        if total > 0 {
            let prev = format!("‹ {} ", t!("pager_prev"));
            if current > 1 {
                push(Span::styled(prev, *KEY_STYLE), Some(current - 1));
            } else {
                push(Span::styled(prev, *DIM_STYLE), None);
            }

            for item in page_window(current, total, radius) {
                match item {
                    PageItem::Page(page) if page == current => {
                        push(Span::styled(format!(" {} ", page), *CURRENT_PAGE_STYLE), None)
                    }
                    PageItem::Page(page) => {
                        push(Span::styled(format!(" {} ", page), *LABEL_STYLE), Some(page))
                    }
                    PageItem::Ellipsis => push(Span::styled(" … ", *DIM_STYLE), None),
                }
            }

            let next = format!(" {} ›", t!("pager_next"));
            if current < total {
                push(Span::styled(next, *KEY_STYLE), Some(current + 1));
            } else {
                push(Span::styled(next, *DIM_STYLE), None);
            }
        }

        let strip = Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), area.height);
        f.render_widget(Paragraph::new(Line::from(spans)), strip);

        let summary = t!("pager_summary", page = current, pages = total.max(1)).to_string();
        f.render_widget(
            Paragraph::new(Span::styled(format!("{} ", summary), *DIM_STYLE))
                .alignment(Alignment::Right),
            area,
        );

        // Anything drawn past the right edge cannot be clicked
        hits.retain(|(rect, _)| rect.x < area.x + area.width);
        state.hits.pages = hits;
    }
}
