//! Event listing: the store, its pure helpers and the terminal front end.

pub mod filter;
pub mod input;
pub mod paginate;
pub mod responsive;
pub mod state;
pub mod text;
pub mod tui;

pub use state::{DashboardState, FetchFailure, FetchState};
pub use tui::Dashboard;
