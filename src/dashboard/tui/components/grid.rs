use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::components::event_feed::EventRecord;
use crate::dashboard::state::DashboardState;
use crate::dashboard::text::{marquee, truncate_text};
use crate::dashboard::tui::theme::{
    category_badge_style, fee_badge_style, BORDER_STYLE, CURSOR_BORDER_STYLE, DIM_STYLE,
    EVENT_TITLE_STYLE, LABEL_STYLE,
};
use crate::utils::time::format_date_range;

/// Borders plus the badge and title lines
const MIN_CARD_HEIGHT: u16 = 4;

/// Event cards, three per row on wide terminals and one per row otherwise
pub(crate) struct GridComponent;

impl Component for GridComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let viewport = state.viewport();
        let columns = viewport.grid_columns().max(1);
        let rows = state.page_size().div_ceil(columns).max(1);

        let row_height = (area.height / rows as u16).max(MIN_CARD_HEIGHT);
        let visible_rows = ((area.height / row_height) as usize).max(1);
        // Keep the cursor's row on screen when not every row fits
        let cursor_row = state.cursor() / columns;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);
        let column_width = area.width / columns as u16;

        let threshold = viewport.marquee_threshold();
        let tick = state.tick();
        let cursor = state.cursor();
        let mut hits = Vec::new();

        for (index, event) in state.page_slice().into_iter().enumerate() {
            let row = index / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let column = index % columns;

            let x = area.x + column as u16 * column_width;
            let width = if column + 1 == columns {
                area.x + area.width - x
            } else {
                column_width
            };
            let y = area.y + (row - first_row) as u16 * row_height;
            let height = row_height.min(area.y + area.height - y);
            let card = Rect::new(x, y, width, height);

            render_card(f, card, event, index == cursor, threshold, tick);
            hits.push((card, index));
        }

        state.hits.items = hits;
    }
}

fn render_card(
    f: &mut Frame,
    card: Rect,
    event: &EventRecord,
    focused: bool,
    threshold: usize,
    tick: u64,
) {
    let border_style = if focused {
        *CURSOR_BORDER_STYLE
    } else {
        *BORDER_STYLE
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(card);
    let width = inner.width as usize;

    let fee_label = if event.is_free {
        t!("fee_free")
    } else {
        t!("fee_paid")
    };

    let mut badges = Vec::new();
    if !event.category.is_empty() {
        badges.push(Span::styled(
            format!(" {} ", event.category),
            category_badge_style(&event.category),
        ));
        badges.push(Span::raw(" "));
    }
    badges.push(Span::styled(
        format!(" {} ", fee_label),
        fee_badge_style(event.is_free),
    ));

    let title = marquee(&event.event_name, threshold, width, tick);
    let lines = vec![
        Line::from(badges),
        Line::from(Span::styled(truncate_text(&title, width), *EVENT_TITLE_STYLE)),
        Line::from(Span::styled(
            truncate_text(&format!("📍 {}", event.location), width),
            *LABEL_STYLE,
        )),
        Line::from(Span::styled(
            format_date_range(&event.start_date, &event.end_date),
            *DIM_STYLE,
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), card);
}
