//! End-to-end flows through `handle_event`, from permission grant to
//! favorites surviving a restart.

use stylehub::api::Endpoint;
use stylehub::app::{map_key, Key};
use stylehub::catalog::{CategoryFilter, LoadState, SortOrder};
use stylehub::storage::{JsonStorage, MemoryStorage, Storage};
use stylehub::ui::render_to_string;
use stylehub::{handle_event, initialize, Action, AppState, Config, Event, InputMode, SearchFocus, ViewMode};

const PRODUCTS: &str = r#"[
    {"id": 1, "title": "Fjallraven Foldsack Backpack", "price": 109.95, "description": "Fits 15 inch laptops",
     "category": "men's clothing", "image": "https://example.com/1.jpg", "rating": {"rate": 3.9, "count": 120}},
    {"id": 2, "title": "Mens Casual Premium Slim Fit T-Shirts", "price": 22.3, "description": "Slim fit",
     "category": "men's clothing", "image": "https://example.com/2.jpg", "rating": {"rate": 4.1, "count": 259}},
    {"id": 3, "title": "Solid Gold Petite Micropave", "price": 168.0, "description": "Gold ring",
     "category": "jewelery", "image": "https://example.com/3.jpg", "rating": {"rate": 4.6, "count": 70}},
    {"id": 4, "title": "WD 2TB Elements Portable External Hard Drive", "price": 64.0, "description": "USB 3.0",
     "category": "electronics", "image": "https://example.com/4.jpg", "rating": {"rate": 3.3, "count": 203}}
]"#;

const CATEGORIES: &str = r#"["electronics", "jewelery", "men's clothing", "women's clothing"]"#;

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .flat_map(|event| handle_event(state, event).unwrap().1)
        .collect()
}

fn response(endpoint: Endpoint, status: u16, body: &str) -> Event {
    Event::Response {
        endpoint,
        status,
        body: body.as_bytes().to_vec(),
    }
}

fn loaded(storage: Box<dyn Storage>) -> AppState {
    let mut state = initialize(&Config::default(), storage);
    let actions = send(&mut state, &[Event::PermissionsResult { granted: true }]);
    assert_eq!(actions, vec![Action::Fetch(Endpoint::Products), Action::Fetch(Endpoint::Categories)]);

    // Categories may arrive first.
    send(
        &mut state,
        &[
            response(Endpoint::Categories, 200, CATEGORIES),
            response(Endpoint::Products, 200, PRODUCTS),
        ],
    );
    state
}

fn view_ids(state: &AppState) -> Vec<u64> {
    state.catalog.view().iter().map(|p| p.id).collect()
}

#[test]
fn loads_and_sorts_by_price() {
    let mut state = loaded(Box::new(MemoryStorage::new()));

    assert_eq!(*state.catalog.load_state(), LoadState::Ready);
    assert_eq!(state.catalog.categories().len(), 4);
    assert_eq!(view_ids(&state), vec![2, 4, 1, 3]);

    send(&mut state, &[Event::ToggleSort]);
    assert_eq!(state.catalog.filter().sort_order, SortOrder::Descending);
    assert_eq!(view_ids(&state), vec![3, 1, 4, 2]);

    send(&mut state, &[Event::ToggleSort]);
    assert_eq!(view_ids(&state), vec![2, 4, 1, 3]);
}

#[test]
fn search_category_and_favorites_combine() {
    let mut state = loaded(Box::new(MemoryStorage::new()));

    send(&mut state, &[Event::SearchMode]);
    for c in "FIT".chars() {
        send(&mut state, &[Event::Char(c)]);
    }
    assert_eq!(view_ids(&state), vec![2]);

    send(&mut state, &[Event::ExitSearch]);
    assert_eq!(view_ids(&state).len(), 4);

    // electronics is the first fetched category
    send(&mut state, &[Event::NextCategory]);
    assert_eq!(state.catalog.filter().category, CategoryFilter::Only("electronics".to_string()));
    assert_eq!(view_ids(&state), vec![4]);

    send(&mut state, &[Event::ToggleFavorite, Event::PrevCategory, Event::ToggleFavoritesView]);
    assert_eq!(view_ids(&state), vec![4]);

    send(&mut state, &[Event::BrowseAll]);
    assert!(!state.catalog.filter().show_favorites_only);
    assert_eq!(view_ids(&state).len(), 4);
}

#[test]
fn toolbar_keys_keep_the_search_query() {
    let mut state = loaded(Box::new(MemoryStorage::new()));

    let mut keys = vec![Key::Char('/')];
    keys.extend("shirt".chars().map(Key::Char));
    keys.extend([Key::Enter, Key::Char('s'), Key::Char('c')]);

    for key in keys {
        let event = map_key(state.view_mode, state.input_mode, key).unwrap();
        handle_event(&mut state, &event).unwrap();
    }

    assert_eq!(state.catalog.filter().search_query, "shirt");
    assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    assert_eq!(state.catalog.filter().sort_order, SortOrder::Descending);
    assert_eq!(state.catalog.filter().category, CategoryFilter::Only("electronics".to_string()));
    assert!(view_ids(&state).is_empty());

    for key in [Key::Char('C'), Key::Char('v')] {
        let event = map_key(state.view_mode, state.input_mode, key).unwrap();
        handle_event(&mut state, &event).unwrap();
    }
    assert_eq!(state.catalog.filter().category, CategoryFilter::All);
    assert!(state.catalog.filter().show_favorites_only);
    assert_eq!(state.catalog.filter().search_query, "shirt");
}

#[test]
fn detail_overlay_round_trip() {
    let mut state = loaded(Box::new(MemoryStorage::new()));

    send(&mut state, &[Event::MoveRight, Event::OpenDetail]);
    assert_eq!(state.view_mode, ViewMode::Detail(4));

    send(&mut state, &[Event::ToggleFavorite, Event::AddToCart]);
    assert!(state.catalog.is_favorite(4));

    send(&mut state, &[Event::CloseDetail]);
    assert_eq!(state.view_mode, ViewMode::Grid);
    assert_eq!(state.selected_index, 1);
}

#[test]
fn either_failure_blocks_the_catalog() {
    for failing in Endpoint::ALL {
        let mut state = initialize(&Config::default(), Box::new(MemoryStorage::new()));
        send(&mut state, &[response(failing, 503, "")]);

        assert_eq!(
            *state.catalog.load_state(),
            LoadState::Failed {
                reason: "HTTP status 503".to_string()
            }
        );

        // A late success does not recover.
        send(&mut state, &[response(Endpoint::Products, 200, PRODUCTS)]);
        assert!(state.catalog.is_failed());
        assert!(state.catalog.view().is_empty());

        let frame = render_to_string(&state, 24, 80);
        assert!(frame.contains("HTTP status 503"));
    }
}

#[test]
fn malformed_body_is_a_load_failure() {
    let mut state = initialize(&Config::default(), Box::new(MemoryStorage::new()));
    send(&mut state, &[response(Endpoint::Products, 200, "{\"not\": \"a list\"}")]);

    assert!(state.catalog.is_failed());
    let (render, actions) = handle_event(&mut state, &Event::ToggleSort).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.catalog.filter().sort_order, SortOrder::Ascending);
}

#[test]
fn denied_permission_shows_error() {
    let mut state = initialize(&Config::default(), Box::new(MemoryStorage::new()));
    let actions = send(&mut state, &[Event::PermissionsResult { granted: false }]);

    assert!(actions.is_empty());
    assert!(state.catalog.is_failed());
}

#[test]
fn favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let storage = JsonStorage::new(path.clone()).unwrap();
        let mut state = loaded(Box::new(storage));
        // view order is 2, 4, 1, 3
        send(&mut state, &[Event::ToggleFavorite, Event::MoveRight, Event::MoveRight, Event::ToggleFavorite]);
        assert!(state.catalog.is_favorite(2));
        assert!(state.catalog.is_favorite(1));
    }

    let storage = JsonStorage::new(path).unwrap();
    assert_eq!(storage.get("favorites").unwrap().as_deref(), Some("[1,2]"));

    let mut state = loaded(Box::new(storage));
    send(&mut state, &[Event::ToggleFavoritesView]);
    assert_eq!(view_ids(&state), vec![2, 1]);

    // un-favoriting inside the favorites view drops the card
    send(&mut state, &[Event::ToggleFavorite]);
    assert_eq!(view_ids(&state), vec![1]);
    assert_eq!(state.selected_index, 0);
}
