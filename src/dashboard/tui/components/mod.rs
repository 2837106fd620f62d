use ratatui::{layout::Rect, Frame};

use crate::dashboard::state::DashboardState;

/// A region of the dashboard screen
pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DashboardState);
}

pub(crate) mod banner;
pub(crate) mod filter_bar;
pub(crate) mod grid;
pub(crate) mod header;
pub(crate) mod modal;
pub(crate) mod pager;
pub(crate) mod table;
pub(crate) mod traffic_card;

pub(crate) use banner::BannerComponent;
pub(crate) use filter_bar::FilterBarComponent;
pub(crate) use grid::GridComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use modal::DetailModalComponent;
pub(crate) use pager::PagerComponent;
pub(crate) use table::TableComponent;
pub(crate) use traffic_card::TrafficCardComponent;
