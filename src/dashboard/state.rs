//! Dashboard store: the working list, filter and view settings, and the
//! selectors deriving the filtered set and page slice from them.

use super::filter::{self, EventFilter, FeeType};
use super::input::{Action, Effect};
use super::paginate::{Paginator, ViewMode};
use super::responsive::Viewport;
use crate::components::event_feed::models::normalize_all;
use crate::components::event_feed::{EventRecord, FetchResult};
use crate::components::traffic::TrafficSnapshot;
use crate::error::DashResult;
use ratatui::layout::{Position, Rect};
use tracing::{debug, error, info, warn};

/// Why the last refresh left the dashboard without events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The API answered with nothing
    DataUnavailable,
    /// Transport or parse failure
    FetchFailed,
}

impl FetchFailure {
    pub fn message(&self) -> String {
        match self {
            FetchFailure::DataUnavailable => t!("error_data_unavailable").to_string(),
            FetchFailure::FetchFailed => t!("error_fetch_failed").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(FetchFailure),
}

/// Screen regions recorded by the last draw, used to resolve mouse clicks
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Card or row rectangles with their index in the page slice
    pub items: Vec<(Rect, usize)>,
    /// Page-number rectangles with the page they jump to
    pub pages: Vec<(Rect, usize)>,
    pub modal: Option<Rect>,
    pub close_button: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.items.clear();
        self.pages.clear();
        self.modal = None;
        self.close_button = None;
    }

    fn item_at(&self, position: Position) -> Option<usize> {
        self.items
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, index)| *index)
    }

    fn page_at(&self, position: Position) -> Option<usize> {
        self.pages
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, page)| *page)
    }
}

pub struct DashboardState {
    events: Vec<EventRecord>,
    fetch: FetchState,
    generation: u64,
    filter: EventFilter,
    selected_mode: ViewMode,
    viewport: Viewport,
    paginator: Paginator,
    cursor: usize,
    selected: Option<EventRecord>,
    banner_dismissed: bool,
    search_editing: bool,
    traffic: Option<TrafficSnapshot>,
    tick: u64,
    pub hits: HitMap,
}

impl DashboardState {
    pub fn new(width: u16) -> Self {
        let viewport = Viewport::new(width);
        let selected_mode = ViewMode::default();
        Self {
            events: Vec::new(),
            fetch: FetchState::Idle,
            generation: 0,
            filter: EventFilter::default(),
            selected_mode,
            viewport,
            paginator: Paginator::new(viewport.effective_mode(selected_mode).page_size()),
            cursor: 0,
            selected: None,
            banner_dismissed: false,
            search_editing: false,
            traffic: None,
            tick: 0,
            hits: HitMap::default(),
        }
    }

    // --- Selectors ---

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn selected_mode(&self) -> ViewMode {
        self.selected_mode
    }

    /// Layout actually rendered; narrow terminals force the grid
    pub fn view_mode(&self) -> ViewMode {
        self.viewport.effective_mode(self.selected_mode)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    pub fn filtered(&self) -> Vec<&EventRecord> {
        self.filter.apply(&self.events)
    }

    pub fn filtered_count(&self) -> usize {
        self.events.iter().filter(|e| self.filter.matches(e)).count()
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count(self.filtered_count())
    }

    pub fn page_slice(&self) -> Vec<&EventRecord> {
        let filtered = self.filtered();
        self.paginator.slice(&filtered).to_vec()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_event(&self) -> Option<&EventRecord> {
        self.page_slice().get(self.cursor).copied()
    }

    pub fn selected(&self) -> Option<&EventRecord> {
        self.selected.as_ref()
    }

    /// Failure to show in the banner, unless dismissed
    pub fn banner(&self) -> Option<FetchFailure> {
        match self.fetch {
            FetchState::Error(failure) if !self.banner_dismissed => Some(failure),
            _ => None,
        }
    }

    pub fn search_editing(&self) -> bool {
        self.search_editing
    }

    pub fn category_options(&self) -> Vec<String> {
        filter::categories(&self.events)
    }

    /// Traffic snapshot, only when it holds something to show
    pub fn traffic(&self) -> Option<&TrafficSnapshot> {
        self.traffic.as_ref().filter(|snapshot| snapshot.is_present())
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    // --- Fetch lifecycle ---

    /// Enter `Loading` and hand out the generation of this request
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.fetch = FetchState::Loading;
        self.banner_dismissed = false;
        self.generation
    }

    /// Apply a fetch result; results of superseded requests are dropped
    pub fn complete_refresh(&mut self, generation: u64, result: FetchResult) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale event response (generation {}, latest {})",
                generation, self.generation
            );
            return false;
        }

        self.selected = None;
        self.cursor = 0;
        self.paginator.reset();
        self.banner_dismissed = false;

        match result {
            Ok(Some(raw)) if !raw.is_empty() => {
                self.events = normalize_all(&raw);
                self.fetch = FetchState::Loaded;
                info!("Loaded {} events", self.events.len());
            }
            Ok(_) => {
                warn!("Event API returned no data");
                self.events.clear();
                self.fetch = FetchState::Error(FetchFailure::DataUnavailable);
            }
            Err(e) => {
                error!("Failed to fetch events: {}", e);
                self.events.clear();
                self.fetch = FetchState::Error(FetchFailure::FetchFailed);
            }
        }

        true
    }

    /// Apply a traffic fetch; failures keep the previous snapshot
    pub fn update_traffic(&mut self, result: DashResult<Option<TrafficSnapshot>>) {
        match result {
            Ok(Some(snapshot)) => self.traffic = Some(snapshot),
            Ok(None) => {}
            Err(e) => warn!("Failed to fetch traffic snapshot: {}", e),
        }
    }

    // --- Filters ---

    fn filters_changed(&mut self) {
        self.paginator.reset();
        self.cursor = 0;
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.category = category;
        self.filters_changed();
    }

    pub fn cycle_category(&mut self) {
        let options = self.category_options();
        let next = filter::cycle_category(&options, self.filter.category.as_deref());
        self.set_category(next);
    }

    pub fn set_fee(&mut self, fee: Option<FeeType>) {
        self.filter.fee = fee;
        self.filters_changed();
    }

    pub fn cycle_fee(&mut self) {
        self.set_fee(FeeType::cycle(self.filter.fee));
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.filters_changed();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search.push(c);
        self.filters_changed();
    }

    pub fn pop_search_char(&mut self) {
        self.filter.search.pop();
        self.filters_changed();
    }

    pub fn clear_filters(&mut self) {
        self.filter = EventFilter::default();
        self.filters_changed();
    }

    pub fn start_search(&mut self) {
        self.search_editing = true;
    }

    pub fn end_search(&mut self) {
        self.search_editing = false;
    }

    // --- View mode and viewport ---

    fn sync_page_size(&mut self) {
        let page_size = self.view_mode().page_size();
        if page_size != self.paginator.page_size() {
            self.paginator.set_page_size(page_size);
            self.cursor = 0;
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.selected_mode = mode;
        self.sync_page_size();
    }

    /// Switch grid/table; refused on narrow terminals
    pub fn toggle_view_mode(&mut self) -> bool {
        if !self.viewport.can_switch_mode() {
            return false;
        }
        self.set_view_mode(self.selected_mode.toggled());
        true
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport = Viewport::new(width);
        self.sync_page_size();
    }

    // --- Pages and cursor ---

    fn page_changed(&mut self) {
        self.cursor = 0;
    }

    pub fn next_page(&mut self) {
        self.paginator.next(self.filtered_count());
        self.page_changed();
    }

    pub fn prev_page(&mut self) {
        self.paginator.prev(self.filtered_count());
        self.page_changed();
    }

    pub fn first_page(&mut self) {
        self.paginator.reset();
        self.page_changed();
    }

    pub fn last_page(&mut self) {
        self.paginator.last(self.filtered_count());
        self.page_changed();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to(page, self.filtered_count());
        self.page_changed();
    }

    fn columns(&self) -> usize {
        match self.view_mode() {
            ViewMode::Grid => self.viewport.grid_columns(),
            ViewMode::Table => 1,
        }
    }

    /// Move the cursor by whole cells; stays within the page slice
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.page_slice().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let step = dx + dy * self.columns() as isize;
        let target = self.cursor as isize + step;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    // --- Detail modal ---

    pub fn open_cursor(&mut self) {
        self.open_at(self.cursor);
    }

    /// Open the modal for the `index`-th item of the page slice
    pub fn open_at(&mut self, index: usize) {
        let event = self.page_slice().get(index).map(|event| (*event).clone());
        if let Some(event) = event {
            self.cursor = index;
            self.selected = Some(event);
        }
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    pub fn dismiss_banner(&mut self) {
        self.banner_dismissed = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Resolve a left click against the regions of the last draw
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.selected.is_some() {
            let on_close = self.hits.close_button.is_some_and(|r| r.contains(position));
            let inside = self.hits.modal.is_some_and(|r| r.contains(position));
            if on_close || !inside {
                self.close_modal();
            }
            return;
        }

        if let Some(page) = self.hits.page_at(position) {
            self.go_to_page(page);
        } else if let Some(index) = self.hits.item_at(position) {
            self.open_at(index);
        }
    }

    /// Apply an action and report what the event loop must do next
    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::Refresh => return Effect::Refresh,
            Action::ToggleView => {
                if !self.toggle_view_mode() {
                    debug!("View mode switch ignored on a narrow terminal");
                }
            }
            Action::CycleCategory => self.cycle_category(),
            Action::CycleFee => self.cycle_fee(),
            Action::ClearFilters => self.clear_filters(),
            Action::StartSearch => self.start_search(),
            Action::SearchChar(c) => self.push_search_char(c),
            Action::SearchBackspace => self.pop_search_char(),
            Action::SearchClear => self.set_search(""),
            Action::EndSearch => self.end_search(),
            Action::NextPage => self.next_page(),
            Action::PrevPage => self.prev_page(),
            Action::FirstPage => self.first_page(),
            Action::LastPage => self.last_page(),
            Action::CursorLeft => self.move_cursor(-1, 0),
            Action::CursorRight => self.move_cursor(1, 0),
            Action::CursorUp => self.move_cursor(0, -1),
            Action::CursorDown => self.move_cursor(0, 1),
            Action::OpenSelected => self.open_cursor(),
            Action::CloseModal => self.close_modal(),
            Action::DismissBanner => self.dismiss_banner(),
            Action::Click { column, row } => self.handle_click(column, row),
            Action::Resize(width) => self.set_viewport_width(width),
            Action::Ignore => {}
        }
        Effect::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::event_feed::RawEventRecord;
    use crate::error::event_feed_error;

    fn raw_events(count: usize) -> Vec<RawEventRecord> {
        (0..count)
            .map(|i| RawEventRecord {
                category: if i % 2 == 0 { "연극" } else { "국악" }.to_string(),
                address: format!("Hall {}", i),
                event_name: format!("Event {}", i),
                start_date: "2024-05-01".to_string(),
                end_date: "2024-05-02".to_string(),
                event_fee: if i % 3 == 0 { String::new() } else { "1000원".to_string() },
            })
            .collect()
    }

    fn loaded(width: u16, count: usize) -> DashboardState {
        let mut state = DashboardState::new(width);
        let generation = state.begin_refresh();
        assert!(state.complete_refresh(generation, Ok(Some(raw_events(count)))));
        state
    }

    #[test]
    fn test_refresh_lifecycle() {
        let mut state = DashboardState::new(120);
        assert_eq!(state.fetch_state(), FetchState::Idle);

        let generation = state.begin_refresh();
        assert!(state.is_loading());

        state.complete_refresh(generation, Ok(Some(raw_events(4))));
        assert_eq!(state.fetch_state(), FetchState::Loaded);
        assert_eq!(state.events().len(), 4);
        assert!(state.banner().is_none());
    }

    #[test]
    fn test_empty_response_shows_banner() {
        let mut state = loaded(120, 5);

        let generation = state.begin_refresh();
        state.complete_refresh(generation, Ok(Some(Vec::new())));
        assert_eq!(state.events().len(), 0);
        assert_eq!(state.banner(), Some(FetchFailure::DataUnavailable));

        let generation = state.begin_refresh();
        state.complete_refresh(generation, Ok(None));
        assert_eq!(state.fetch_state(), FetchState::Error(FetchFailure::DataUnavailable));
    }

    #[test]
    fn test_failure_empties_list() {
        let mut state = loaded(120, 5);
        let generation = state.begin_refresh();
        state.complete_refresh(generation, Err(event_feed_error("connection refused")));

        assert!(state.events().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.banner(), Some(FetchFailure::FetchFailed));

        state.dismiss_banner();
        assert!(state.banner().is_none());
        assert_eq!(state.fetch_state(), FetchState::Error(FetchFailure::FetchFailed));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DashboardState::new(120);
        let first = state.begin_refresh();
        let second = state.begin_refresh();

        // The newer request answers first
        assert!(state.complete_refresh(second, Ok(Some(raw_events(3)))));
        assert!(!state.complete_refresh(first, Err(event_feed_error("timeout"))));

        assert_eq!(state.fetch_state(), FetchState::Loaded);
        assert_eq!(state.events().len(), 3);
    }

    fn assert_resets_page(state: &mut DashboardState, change: impl FnOnce(&mut DashboardState)) {
        state.clear_filters();
        state.go_to_page(3);
        assert_eq!(state.page(), 3);
        change(state);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = loaded(120, 30);
        assert_resets_page(&mut state, |s| s.set_category(Some("연극".to_string())));
        assert_resets_page(&mut state, |s| s.cycle_category());
        assert_resets_page(&mut state, |s| s.set_fee(Some(FeeType::Paid)));
        assert_resets_page(&mut state, |s| s.cycle_fee());
        assert_resets_page(&mut state, |s| s.set_search("event"));
        assert_resets_page(&mut state, |s| s.push_search_char('1'));
        assert_resets_page(&mut state, |s| s.pop_search_char());
        assert_resets_page(&mut state, |s| s.clear_filters());
    }

    #[test]
    fn test_view_mode_switch_changes_page_size() {
        let mut state = loaded(120, 30);
        assert_eq!(state.page_size(), 9);

        state.go_to_page(2);
        state.set_view_mode(ViewMode::Table);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_count(), 3);

        state.go_to_page(3);
        assert!(state.toggle_view_mode());
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert_eq!(state.page_size(), 9);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_narrow_viewport_forces_grid() {
        let mut state = loaded(120, 30);
        state.set_view_mode(ViewMode::Table);
        state.go_to_page(2);

        state.set_viewport_width(80);
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert_eq!(state.selected_mode(), ViewMode::Table);
        assert_eq!(state.page_size(), 9);
        assert_eq!(state.page(), 1);
        assert!(!state.toggle_view_mode());

        // Widening restores the user's choice
        state.set_viewport_width(140);
        assert_eq!(state.view_mode(), ViewMode::Table);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn test_resize_within_same_mode_keeps_page() {
        let mut state = loaded(120, 30);
        state.go_to_page(2);
        state.set_viewport_width(150);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_twenty_five_filtered_records_in_grid() {
        let state = loaded(120, 25);
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert_eq!(state.page_count(), 3);

        let mut state = state;
        let mut sizes = Vec::new();
        for page in 1..=3 {
            state.go_to_page(page);
            sizes.push(state.page_slice().len());
        }
        assert_eq!(sizes, vec![9, 9, 7]);
    }

    #[test]
    fn test_cursor_moves_within_page() {
        let mut state = loaded(120, 25);
        state.move_cursor(0, 1);
        assert_eq!(state.cursor(), 3);
        state.move_cursor(1, 0);
        assert_eq!(state.cursor(), 4);
        state.move_cursor(0, 5);
        assert_eq!(state.cursor(), 8);
        state.move_cursor(-20, 0);
        assert_eq!(state.cursor(), 0);

        state.next_page();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.cursor_event().map(|e| e.event_name.as_str()), Some("Event 9"));
    }

    #[test]
    fn test_modal_selection() {
        let mut state = loaded(120, 12);
        state.open_at(2);
        assert_eq!(state.selected().map(|e| e.event_name.as_str()), Some("Event 2"));

        // Only one record at a time
        state.open_at(4);
        assert_eq!(state.selected().map(|e| e.event_name.as_str()), Some("Event 4"));

        state.close_modal();
        assert!(state.selected().is_none());

        state.open_at(50);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_refresh_clears_selection() {
        let mut state = loaded(120, 12);
        state.open_at(1);
        let generation = state.begin_refresh();
        state.complete_refresh(generation, Ok(Some(raw_events(2))));
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_clicks_resolve_against_hit_map() {
        let mut state = loaded(120, 30);
        state.hits.items.push((Rect::new(0, 5, 30, 4), 1));
        state.hits.pages.push((Rect::new(40, 20, 3, 1), 3));

        state.handle_click(41, 20);
        assert_eq!(state.page(), 3);

        state.handle_click(10, 6);
        assert_eq!(state.selected().map(|e| e.event_name.as_str()), Some("Event 19"));

        // Clicks inside the modal keep it open
        state.hits.modal = Some(Rect::new(20, 5, 60, 12));
        state.hits.close_button = Some(Rect::new(45, 15, 10, 1));
        state.handle_click(30, 8);
        assert!(state.selected().is_some());

        // Backdrop click closes
        state.handle_click(2, 2);
        assert!(state.selected().is_none());

        state.open_at(0);
        state.handle_click(46, 15);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_dispatch_effects() {
        let mut state = loaded(120, 5);
        assert_eq!(state.dispatch(Action::Quit), Effect::Quit);
        assert_eq!(state.dispatch(Action::Refresh), Effect::Refresh);
        assert_eq!(state.dispatch(Action::CycleFee), Effect::None);
        assert_eq!(state.filter().fee, Some(FeeType::Free));

        state.dispatch(Action::StartSearch);
        for c in "event 4".chars() {
            state.dispatch(Action::SearchChar(c));
        }
        state.dispatch(Action::EndSearch);
        assert!(!state.search_editing());
        assert_eq!(state.filtered_count(), 0);

        state.dispatch(Action::ClearFilters);
        assert_eq!(state.filtered_count(), 5);
    }

    #[test]
    fn test_traffic_failures_keep_snapshot() {
        use crate::components::traffic::models::ParkingLot;
        use crate::error::traffic_error;

        let mut state = DashboardState::new(120);
        assert!(state.traffic().is_none());

        state.update_traffic(Ok(Some(TrafficSnapshot::default())));
        assert!(state.traffic().is_none());

        let snapshot = TrafficSnapshot {
            parking: vec![ParkingLot { name: "시청".into(), capacity: 10, available: 3 }],
            ..Default::default()
        };
        state.update_traffic(Ok(Some(snapshot.clone())));
        state.update_traffic(Err(traffic_error("timeout")));
        assert_eq!(state.traffic(), Some(&snapshot));
    }
}
