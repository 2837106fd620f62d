use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::Component;
use crate::components::event_feed::EventRecord;
use crate::dashboard::state::DashboardState;
use crate::dashboard::text::truncate_text;
use crate::dashboard::tui::theme::{
    category_color, fee_badge_style, BORDER_STYLE, CURSOR_ROW_STYLE, DIM_STYLE, HEADER_ROW_STYLE,
    LABEL_STYLE, VALUE_STYLE,
};
use crate::utils::time::format_date_range;

const CATEGORY_WIDTH: u16 = 14;
const PERIOD_WIDTH: u16 = 23;
const FEE_WIDTH: u16 = 12;
const COLUMN_SPACING: u16 = 1;

/// Tabular listing with one event per row
pub(crate) struct TableComponent;

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(*BORDER_STYLE);
        let inner = block.inner(chunks[0]);

        let fixed = CATEGORY_WIDTH + PERIOD_WIDTH + FEE_WIDTH + COLUMN_SPACING * 4;
        let rest = inner.width.saturating_sub(fixed);
        let name_width = rest * 3 / 5;
        let location_width = rest - name_width;
        let widths = [
            Constraint::Length(CATEGORY_WIDTH),
            Constraint::Length(name_width),
            Constraint::Length(location_width),
            Constraint::Length(PERIOD_WIDTH),
            Constraint::Length(FEE_WIDTH),
        ];

        let header = Row::new(vec![
            t!("column_category").to_string(),
            t!("column_name").to_string(),
            t!("column_location").to_string(),
            t!("column_period").to_string(),
            t!("column_fee").to_string(),
        ])
        .style(*HEADER_ROW_STYLE);

        let cursor = state.cursor();
        let mut rows = Vec::new();
        let mut len = 0;

        for event in state.page_slice() {
            let cell = |text: &str, width: u16| truncate_text(text, width as usize);

            rows.push(Row::new(vec![
                Cell::from(cell(&event.category, CATEGORY_WIDTH))
                    .style(Style::new().fg(category_color(&event.category))),
                Cell::from(cell(&event.event_name, name_width)).style(*VALUE_STYLE),
                Cell::from(cell(&event.location, location_width)).style(*LABEL_STYLE),
                Cell::from(format_date_range(&event.start_date, &event.end_date)).style(*DIM_STYLE),
                Cell::from(cell(&fee_text(event), FEE_WIDTH)).style(fee_badge_style(event.is_free)),
            ]));
            len += 1;
        }

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(*CURSOR_ROW_STYLE)
            .block(block);

        // The table scrolls so the cursor row stays visible
        let mut table_state = TableState::default().with_selected(Some(cursor));
        f.render_stateful_widget(table, chunks[0], &mut table_state);

        // Row 0 of the inner area is the header
        let offset = table_state.offset();
        let data_rows = inner.height.saturating_sub(1) as usize;
        let hits: Vec<(Rect, usize)> = (offset..len.min(offset + data_rows))
            .map(|index| {
                let y = inner.y + 1 + (index - offset) as u16;
                (Rect::new(inner.x, y, inner.width, 1), index)
            })
            .collect();

        // Truncated cells are shown in full for the row under the cursor
        if let Some(event) = state.cursor_event() {
            let detail = Line::from(vec![
                Span::styled("▸ ", *DIM_STYLE),
                Span::styled(event.event_name.clone(), *VALUE_STYLE),
                Span::styled(" · ", *DIM_STYLE),
                Span::styled(event.location.clone(), *LABEL_STYLE),
                Span::styled(" · ", *DIM_STYLE),
                Span::styled(fee_text(event), *LABEL_STYLE),
            ]);
            f.render_widget(Paragraph::new(detail), chunks[1]);
        }

        state.hits.items = hits;
    }
}

/// Fee cell: the free marker for free events, the raw fee otherwise
fn fee_text(event: &EventRecord) -> String {
    if event.is_free {
        t!("fee_free").to_string()
    } else {
        event
            .event_fee
            .clone()
            .unwrap_or_else(|| t!("fee_paid").to_string())
    }
}
