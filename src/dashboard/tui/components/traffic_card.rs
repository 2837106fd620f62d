use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::components::traffic::models::Congestion;
use crate::dashboard::state::DashboardState;
use crate::dashboard::text::truncate_text;
use crate::dashboard::tui::theme::{
    congestion_style, BORDER_STYLE, DIM_STYLE, FRAME_STYLE, LABEL_STYLE, VALUE_STYLE,
};

const MAX_ROADS: usize = 5;
const MAX_PARKING: usize = 4;
const MAX_ACCIDENTS: usize = 3;

/// Road, parking and accident summary beside the listing
pub(crate) struct TrafficCardComponent;

impl Component for TrafficCardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState) {
        let Some(snapshot) = state.traffic() else {
            return;
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", t!("traffic_title")), *FRAME_STYLE))
            .borders(Borders::ALL)
            .border_style(*BORDER_STYLE);
        let width = block.inner(area).width as usize;
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(t!("traffic_roads").to_string(), *FRAME_STYLE)));
        for road in snapshot.roads_by_severity().into_iter().take(MAX_ROADS) {
            let speed = format!(" {:>3.0} km/h ", road.speed_kmh);
            let name_width = width.saturating_sub(speed.chars().count() + 2);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", congestion_marker(road.congestion)),
                    congestion_style(road.congestion),
                ),
                Span::styled(truncate_text(&road.road_name, name_width), *VALUE_STYLE),
                Span::styled(speed, congestion_style(road.congestion)),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(t!("traffic_parking").to_string(), *FRAME_STYLE)));
        for lot in snapshot.parking.iter().take(MAX_PARKING) {
            let counts = format!(
                " {}/{} ({:.0}%)",
                lot.available,
                lot.capacity,
                lot.availability() * 100.0
            );
            let name_width = width.saturating_sub(counts.chars().count());
            lines.push(Line::from(vec![
                Span::styled(truncate_text(&lot.name, name_width), *LABEL_STYLE),
                Span::styled(counts, *VALUE_STYLE),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(t!("traffic_accidents").to_string(), *FRAME_STYLE)));
        if snapshot.accidents.is_empty() {
            lines.push(Line::from(Span::styled(
                t!("traffic_no_accidents").to_string(),
                *DIM_STYLE,
            )));
        }
        for accident in snapshot.accidents.iter().take(MAX_ACCIDENTS) {
            let text = format!("⚠ {} · {}", accident.location, accident.description);
            lines.push(Line::from(Span::styled(
                truncate_text(&text, width),
                congestion_style(Congestion::Congested),
            )));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn congestion_marker(congestion: Congestion) -> &'static str {
    match congestion {
        Congestion::Smooth => "●",
        Congestion::Slow => "◐",
        Congestion::Congested => "○",
        Congestion::Unknown => "·",
    }
}
