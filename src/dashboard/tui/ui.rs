use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{
    BannerComponent, Component, DetailModalComponent, FilterBarComponent, GridComponent,
    HeaderComponent, PagerComponent, TableComponent, TrafficCardComponent,
};
use super::theme::{BORDER_STYLE, DIM_STYLE, LOADING_STYLE};
use crate::dashboard::paginate::ViewMode;
use crate::dashboard::state::DashboardState;

/// Rows given to the traffic card when it is stacked under the listing
const TRAFFIC_STACKED_HEIGHT: u16 = 10;

pub(crate) fn draw(f: &mut Frame, state: &mut DashboardState) {
    // Regions are re-recorded by the components below
    state.hits.clear();

    let banner_height = if state.banner().is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    HeaderComponent.render(f, chunks[0], state);
    FilterBarComponent.render(f, chunks[1], state);
    if banner_height > 0 {
        BannerComponent.render(f, chunks[2], state);
    }
    render_body(f, chunks[3], state);
    PagerComponent.render(f, chunks[4], state);
    render_footer(f, chunks[5], state);

    let area = f.area();
    DetailModalComponent.render(f, area, state);
}

fn render_body(f: &mut Frame, area: Rect, state: &mut DashboardState) {
    let (list_area, traffic_area) = if state.traffic().is_some() {
        let chunks = if state.viewport().is_narrow() {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(TRAFFIC_STACKED_HEIGHT)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(area)
        };
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    if state.filtered_count() == 0 {
        render_empty(f, list_area, state);
    } else {
        match state.view_mode() {
            ViewMode::Grid => GridComponent.render(f, list_area, state),
            ViewMode::Table => TableComponent.render(f, list_area, state),
        }
    }

    if let Some(traffic_area) = traffic_area {
        TrafficCardComponent.render(f, traffic_area, state);
    }
}

fn render_empty(f: &mut Frame, area: Rect, state: &DashboardState) {
    let message = if state.is_loading() {
        Span::styled(t!("status_loading").to_string(), *LOADING_STYLE)
    } else if state.events().is_empty() {
        Span::styled(t!("empty_list").to_string(), *DIM_STYLE)
    } else {
        Span::styled(t!("empty_results").to_string(), *DIM_STYLE)
    };

    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::default(); top_padding as usize];
    lines.push(Line::from(message));

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(*BORDER_STYLE),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let help = if state.selected().is_some() {
        t!("footer_modal")
    } else if state.search_editing() {
        t!("footer_search")
    } else {
        t!("footer_help")
    };

    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", help), *DIM_STYLE)),
        area,
    );
}
