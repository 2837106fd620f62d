use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::components::event_feed::EventRecord;
use crate::dashboard::state::DashboardState;
use crate::dashboard::text::truncate_text;
use crate::dashboard::tui::theme::{
    category_badge_style, fee_badge_style, CURSOR_BORDER_STYLE, EVENT_TITLE_STYLE, KEY_STYLE,
    LABEL_STYLE, VALUE_STYLE,
};
use crate::utils::time::format_date_range;

const MODAL_HEIGHT: u16 = 13;

/// Detail popup for the selected event
pub(crate) struct DetailModalComponent;

impl Component for DetailModalComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let Some(event) = state.selected() else {
            return;
        };

        let width_percent = if state.viewport().is_narrow() { 90 } else { 60 };
        let popup = centered_rect(width_percent, MODAL_HEIGHT.min(area.height), area);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", truncate_text(&event.event_name, popup.width.saturating_sub(6) as usize)),
                *EVENT_TITLE_STYLE,
            ))
            .borders(Borders::ALL)
            .border_style(*CURSOR_BORDER_STYLE);
        let inner = block.inner(popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let lines = detail_lines(event);

        f.render_widget(Clear, popup);
        f.render_widget(block, popup);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

        let label = format!("[ {} ]", t!("modal_close"));
        let label_width = Span::raw(label.as_str()).width() as u16;
        let button = Rect::new(
            chunks[1].x + chunks[1].width.saturating_sub(label_width) / 2,
            chunks[1].y,
            label_width.min(chunks[1].width),
            chunks[1].height,
        );
        f.render_widget(
            Paragraph::new(Span::styled(label, *KEY_STYLE)).alignment(Alignment::Center),
            button,
        );

        state.hits.modal = Some(popup);
        state.hits.close_button = Some(button);
    }
}

fn detail_lines(event: &EventRecord) -> Vec<Line<'static>> {
    let fee = if event.is_free {
        t!("fee_free_message").to_string()
    } else {
        event
            .event_fee
            .clone()
            .unwrap_or_else(|| t!("fee_unknown").to_string())
    };
    let fee_badge = if event.is_free {
        t!("fee_free")
    } else {
        t!("fee_paid")
    };

    let field = |label: String, value: String| {
        Line::from(vec![
            Span::styled(format!("{}: ", label), *LABEL_STYLE),
            Span::styled(value, *VALUE_STYLE),
        ])
    };

    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", event.category),
                category_badge_style(&event.category),
            ),
            Span::raw(" "),
            Span::styled(format!(" {} ", fee_badge), fee_badge_style(event.is_free)),
        ]),
        Line::default(),
        field(t!("modal_location").to_string(), event.location.clone()),
        field(
            t!("modal_period").to_string(),
            format_date_range(&event.start_date, &event.end_date),
        ),
        field(t!("modal_fee").to_string(), fee),
    ]
}

/// Rectangle of `percent_x` of the width and `height` rows, centred in `r`
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
