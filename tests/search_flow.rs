//! End-to-end search flows driven through `handle_event`, asserting on the
//! view model the renderer would draw.

use std::collections::BTreeMap;

use serde_json::json;
use zinema::app::notifications::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};
use zinema::app::{FetchStatus, NotificationKind};
use zinema::fetcher::RequestTag;
use zinema::ui::{DetailView, PageSlot, ResultsBody, ResultsView};
use zinema::{handle_event, initialize, Action, AppState, Config, Event, InputMode};

const ROWS: usize = 40;
const COLS: usize = 120;

fn granted_state() -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    state
}

fn search(state: &mut AppState, query: &str) -> Vec<Action> {
    handle_event(state, &Event::FocusSearch).unwrap();
    while !state.input.is_empty() {
        handle_event(state, &Event::Backspace).unwrap();
    }
    for c in query.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
    handle_event(state, &Event::Submit).unwrap().1
}

fn fetch_context(actions: &[Action]) -> BTreeMap<String, String> {
    actions
        .iter()
        .find_map(|action| match action {
            Action::Fetch(request) => Some(request.context.clone()),
            _ => None,
        })
        .expect("a fetch action")
}

fn body(page: u32, count: u32, total_pages: u32) -> Vec<u8> {
    let results: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "id": u64::from(page) * 100 + u64::from(i),
                "title": format!("Batman {page}-{i}"),
                "original_title": format!("Batman {page}-{i}"),
                "release_date": "2008-07-16",
                "vote_average": 7.5,
                "vote_count": 1000 + i,
                "overview": "The caped crusader.",
                "poster_path": "/poster.jpg"
            })
        })
        .collect();

    serde_json::to_vec(&json!({
        "page": page,
        "results": results,
        "total_pages": total_pages,
        "total_results": total_pages * 20
    }))
    .unwrap()
}

fn respond(
    state: &mut AppState,
    context: BTreeMap<String, String>,
    status: u16,
    body: Vec<u8>,
) -> (bool, Vec<Action>) {
    handle_event(state, &Event::FetchCompleted { context, status, body }).unwrap()
}

fn results(state: &AppState) -> ResultsView {
    match state.compute_viewmodel(ROWS, COLS).body {
        ResultsBody::Results(view) => view,
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn batman_first_page_renders_every_row_and_page() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));

    let (render, actions) = respond(&mut state, ctx, 200, body(1, 20, 5));
    assert!(render);
    assert!(actions.is_empty());

    let view = results(&state);
    assert_eq!(view.rows.len(), 20);
    assert_eq!(view.item_count, 20);
    assert_eq!(view.pagination.total_pages, 5);
    assert_eq!(view.pagination.current, 1);
    assert_eq!(
        view.pagination.slots,
        (1..=5).map(PageSlot::Page).collect::<Vec<_>>()
    );
    assert!(!view.pagination.has_previous);
    assert!(view.pagination.has_next);
    assert!(!view.is_stale);
    assert_eq!(state.input_mode, InputMode::Browsing);
}

#[test]
fn blank_queries_notify_without_fetching() {
    let mut state = granted_state();

    for query in ["", "   "] {
        let actions = search(&mut state, query);
        assert_eq!(actions, vec![Action::ScheduleNotificationExpiry { seconds: 3 }]);
    }

    assert_eq!(state.notifications.len(), 2);
    assert!(state
        .notifications
        .iter()
        .all(|n| n.kind == NotificationKind::Error && n.message == EMPTY_QUERY_MESSAGE));
    assert_eq!(state.fetch, FetchStatus::Idle);
    assert!(state.query.is_none());
}

#[test]
fn empty_result_notifies_once_across_renders() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "zzzzqqq"));

    let (_, actions) = respond(&mut state, ctx, 200, body(1, 0, 0));
    assert_eq!(actions, vec![Action::ScheduleNotificationExpiry { seconds: 3 }]);

    for _ in 0..3 {
        let vm = state.compute_viewmodel(ROWS, COLS);
        assert!(matches!(vm.body, ResultsBody::Empty { ref query } if query == "zzzzqqq"));
        assert_eq!(vm.notification.map(|n| n.message).as_deref(), Some(NO_RESULTS_MESSAGE));
    }
    assert_eq!(state.notifications.len(), 1);

    handle_event(&mut state, &Event::NotificationExpired).unwrap();
    assert!(state.compute_viewmodel(ROWS, COLS).notification.is_none());
}

#[test]
fn unauthorized_response_shows_the_error_view() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));

    let error = br#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;
    respond(&mut state, ctx, 401, error.to_vec());

    match state.compute_viewmodel(ROWS, COLS).body {
        ResultsBody::Error { message, detail } => {
            assert_eq!(message, "There was an error, please try again...");
            assert!(detail.contains("Invalid API key"));
            assert!(detail.contains("api_token"));
        }
        other => panic!("expected error view, got {other:?}"),
    }

    let ctx = fetch_context(&search(&mut state, "batman"));
    respond(&mut state, ctx, 200, body(1, 3, 1));
    assert_eq!(results(&state).rows.len(), 3);
}

#[test]
fn late_response_for_an_older_query_is_discarded() {
    let mut state = granted_state();
    let first = fetch_context(&search(&mut state, "alien"));
    let second = fetch_context(&search(&mut state, "aliens"));

    // Arrives while the newer query is still in flight.
    assert_eq!(respond(&mut state, first.clone(), 200, body(1, 5, 1)), (false, vec![]));
    assert!(state.fetch.is_pending());

    respond(&mut state, second, 200, body(1, 2, 1));
    assert_eq!(results(&state).rows.len(), 2);

    // Arrives after the newer query was applied.
    assert_eq!(respond(&mut state, first, 200, body(1, 5, 1)), (false, vec![]));
    let view = results(&state);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(state.query.as_ref().map(|q| q.as_str()), Some("aliens"));
}

#[test]
fn previous_results_stay_visible_while_the_next_page_loads() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));
    respond(&mut state, ctx, 200, body(1, 20, 5));

    let (render, actions) = handle_event(&mut state, &Event::NextPage).unwrap();
    assert!(render);
    let ctx = fetch_context(&actions);
    assert_eq!(RequestTag::from_context(&ctx).unwrap().key.page.get(), 2);

    let view = results(&state);
    assert!(view.is_stale);
    assert_eq!(view.rows.len(), 20);
    assert_eq!(view.pagination.current, 1);

    respond(&mut state, ctx, 200, body(2, 20, 5));
    let view = results(&state);
    assert!(!view.is_stale);
    assert_eq!(view.pagination.current, 2);
    assert_eq!(view.rows[0].title, "Batman 2-1");
}

#[test]
fn new_query_resets_to_the_first_page() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));
    respond(&mut state, ctx, 200, body(1, 20, 5));

    let ctx = fetch_context(&handle_event(&mut state, &Event::LastPage).unwrap().1);
    respond(&mut state, ctx, 200, body(5, 20, 5));
    assert_eq!(state.page.get(), 5);

    let actions = search(&mut state, "joker");
    assert_eq!(state.page.get(), 1);
    let tag = RequestTag::from_context(&fetch_context(&actions)).unwrap();
    assert_eq!(tag.key.page.get(), 1);
    assert_eq!(tag.key.query.as_str(), "joker");
}

#[test]
fn page_navigation_stops_at_the_ends() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));
    respond(&mut state, ctx, 200, body(1, 20, 5));

    assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap(), (false, vec![]));
    assert_eq!(handle_event(&mut state, &Event::FirstPage).unwrap(), (false, vec![]));
}

#[test]
fn detail_overlay_leaves_grid_state_untouched() {
    let mut state = granted_state();
    let ctx = fetch_context(&search(&mut state, "batman"));
    respond(&mut state, ctx, 200, body(1, 20, 5));

    handle_event(&mut state, &Event::SelectNext).unwrap();
    handle_event(&mut state, &Event::SelectNext).unwrap();
    let before = results(&state);

    handle_event(&mut state, &Event::OpenDetail).unwrap();
    let vm = state.compute_viewmodel(ROWS, COLS);
    let detail = vm.detail.expect("detail overlay");
    let movie = &state.last_good.page().unwrap().movies[2];
    assert_eq!(detail, DetailView::from(movie));
    assert_eq!(detail.title, "Batman 1-3");
    assert_eq!(detail.vote_count, 1003);

    // Grid keys are swallowed while the overlay is open.
    assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));

    handle_event(&mut state, &Event::CloseDetail).unwrap();
    let after = results(&state);
    assert!(state.compute_viewmodel(ROWS, COLS).detail.is_none());
    assert_eq!(after.pagination, before.pagination);
    assert_eq!(after.selected_index, before.selected_index);
    assert_eq!(state.cursor, 2);
    assert_eq!(state.page.get(), 1);
}

#[test]
fn searches_wait_for_web_access() {
    let mut state = initialize(&Config::default());
    assert!(search(&mut state, "batman").is_empty());
    assert_eq!(state.fetch, FetchStatus::AwaitingPermission);
    assert!(matches!(
        state.compute_viewmodel(ROWS, COLS).body,
        ResultsBody::Loading { .. }
    ));

    let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
    let tag = RequestTag::from_context(&fetch_context(&actions)).unwrap();
    assert_eq!(tag.key.query.as_str(), "batman");
}
