use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use eventboard::components::event_feed::RawEventRecord;
use eventboard::dashboard::filter::FeeType;
use eventboard::dashboard::input::{map_event, Effect};
use eventboard::dashboard::paginate::ViewMode;
use eventboard::dashboard::{DashboardState, FetchState};
use eventboard::error::event_feed_error;

fn catalogue() -> Vec<RawEventRecord> {
    let categories = ["연극", "국악", "전시/미술"];
    (0..25)
        .map(|i| RawEventRecord {
            category: categories[i % 3].to_string(),
            address: format!("Venue {}", i),
            event_name: if i == 7 {
                "Midnight Lantern Parade".to_string()
            } else {
                format!("Show {:02}", i)
            },
            start_date: "2024-09-01".to_string(),
            end_date: "2024-09-30".to_string(),
            event_fee: if i % 4 == 0 {
                "무료".to_string()
            } else {
                format!("{}0,000원", i % 9 + 1)
            },
        })
        .collect()
}

fn loaded(width: u16) -> DashboardState {
    let mut state = DashboardState::new(width);
    let generation = state.begin_refresh();
    state.complete_refresh(generation, Ok(Some(catalogue())));
    state
}

/// Feed key presses through the same path the terminal loop uses
fn press(state: &mut DashboardState, code: KeyCode) -> Effect {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    let action = map_event(&event, state);
    state.dispatch(action)
}

fn type_text(state: &mut DashboardState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_browse_pages_with_keys() {
    let mut state = loaded(120);
    assert_eq!(state.page_count(), 3);

    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('n'));
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.page(), 3);
    assert_eq!(state.page_slice().len(), 7);

    press(&mut state, KeyCode::Home);
    assert_eq!(state.page(), 1);
    press(&mut state, KeyCode::End);
    assert_eq!(state.page(), 3);
    press(&mut state, KeyCode::Char('p'));
    assert_eq!(state.page(), 2);
}

#[test]
fn test_search_narrows_results_and_resets_page() {
    let mut state = loaded(120);
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.page(), 2);

    press(&mut state, KeyCode::Char('/'));
    assert!(state.search_editing());
    type_text(&mut state, "lantern");
    press(&mut state, KeyCode::Enter);

    assert!(!state.search_editing());
    assert_eq!(state.page(), 1);
    assert_eq!(state.filtered_count(), 1);
    assert_eq!(
        state.page_slice()[0].event_name,
        "Midnight Lantern Parade"
    );

    // Esc outside search mode clears every filter
    press(&mut state, KeyCode::Esc);
    assert!(!state.filter().is_active());
    assert_eq!(state.filtered_count(), 25);
}

#[test]
fn test_category_and_fee_filters_combine() {
    let mut state = loaded(120);

    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.filter().category.as_deref(), Some("연극"));
    let theatre = state.filtered_count();
    assert_eq!(theatre, 9);

    press(&mut state, KeyCode::Char('f'));
    assert_eq!(state.filter().fee, Some(FeeType::Free));
    assert!(state.filtered().iter().all(|e| e.is_free && e.category == "연극"));
    assert!(state.filtered_count() < theatre);

    press(&mut state, KeyCode::Char('f'));
    assert_eq!(state.filter().fee, Some(FeeType::Paid));
    assert!(state.filtered().iter().all(|e| !e.is_free));

    // Cycling past the last category returns to "all"
    for _ in 0..3 {
        press(&mut state, KeyCode::Char('c'));
    }
    assert!(state.filter().category.is_none());
}

#[test]
fn test_view_toggle_and_narrow_terminal() {
    let mut state = loaded(120);
    press(&mut state, KeyCode::Char('v'));
    assert_eq!(state.view_mode(), ViewMode::Table);
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.page_slice().len(), 10);

    state.dispatch(map_event(&Event::Resize(72, 30), &state));
    assert_eq!(state.view_mode(), ViewMode::Grid);
    assert_eq!(state.page_size(), 9);

    // Toggling is refused while narrow
    press(&mut state, KeyCode::Char('v'));
    assert_eq!(state.view_mode(), ViewMode::Grid);

    state.dispatch(map_event(&Event::Resize(130, 30), &state));
    assert_eq!(state.view_mode(), ViewMode::Table);
}

#[test]
fn test_detail_modal_with_keys() {
    let mut state = loaded(120);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.cursor(), 4);

    press(&mut state, KeyCode::Enter);
    let selected = state.selected().unwrap();
    assert_eq!(selected.event_name, "Show 04");
    assert!(selected.is_free);

    // Paging keys are swallowed while the modal is open
    press(&mut state, KeyCode::Char('n'));
    assert_eq!(state.page(), 1);

    press(&mut state, KeyCode::Esc);
    assert!(state.selected().is_none());
}

#[test]
fn test_refresh_and_retry_after_failure() {
    let mut state = loaded(120);
    assert_eq!(press(&mut state, KeyCode::Char('r')), Effect::Refresh);

    let generation = state.begin_refresh();
    state.complete_refresh(generation, Err(event_feed_error("HTTP 502")));
    assert!(state.events().is_empty());
    assert!(state.banner().is_some());

    press(&mut state, KeyCode::Char('x'));
    assert!(state.banner().is_none());

    // Retrying recovers the list
    let generation = state.begin_refresh();
    state.complete_refresh(generation, Ok(Some(catalogue())));
    assert_eq!(state.fetch_state(), FetchState::Loaded);
    assert_eq!(state.events().len(), 25);
    assert_eq!(state.page(), 1);
}

#[test]
fn test_quit_keys() {
    let mut state = loaded(120);
    assert_eq!(press(&mut state, KeyCode::Char('q')), Effect::Quit);

    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let action = map_event(&ctrl_c, &state);
    assert_eq!(state.dispatch(action), Effect::Quit);
}
