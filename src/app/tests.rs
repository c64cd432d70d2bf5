use super::*;
use crate::domain::{Book, Catalog};
use crate::ui::theme::{Theme, ThemeChoice};
use crate::ui::viewmodel::Preview;
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

fn book(id: &str, title: &str, author: &str, genres: &[&str], year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genres: genres.iter().map(|g| (*g).to_string()).collect(),
        image: format!("https://covers.example/{id}.jpg"),
        description: format!("About {title}."),
        published: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// A small handcrafted shelf with known authors and genres.
fn shelf_catalog() -> Catalog {
    let authors: BTreeMap<String, String> = [
        ("tolkien", "J.R.R. Tolkien"),
        ("herbert", "Frank Herbert"),
        ("leguin", "Ursula K. Le Guin"),
        ("austen", "Jane Austen"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect();

    let genres: BTreeMap<String, String> = [
        ("fantasy", "Fantasy"),
        ("scifi", "Science Fiction"),
        ("romance", "Romance"),
        ("classic", "Classic"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect();

    Catalog {
        books: vec![
            book("b1", "The Hobbit", "tolkien", &["fantasy", "classic"], 1937),
            book("b2", "Dune", "herbert", &["scifi"], 1965),
            book("b3", "The Left Hand of Darkness", "leguin", &["scifi"], 1969),
            book("b4", "Emma", "austen", &["romance", "classic"], 1815),
            book("b5", "A Wizard of Earthsea", "leguin", &["fantasy"], 1968),
        ],
        authors,
        genres,
        page_size: 20,
    }
}

/// `total` numbered books sharing one author and genre, for pagination tests.
fn numbered_catalog(total: usize, page_size: usize) -> Catalog {
    Catalog {
        books: (1..=total)
            .map(|n| book(&format!("id-{n}"), &format!("Book {n}"), "doe", &["fiction"], 1980))
            .collect(),
        authors: [("doe".to_string(), "Jane Doe".to_string())].into_iter().collect(),
        genres: [("fiction".to_string(), "Fiction".to_string())].into_iter().collect(),
        page_size,
    }
}

fn state_over(catalog: Catalog) -> AppState {
    AppState::new(catalog, Theme::default(), ThemeChoice::Day)
}

fn submit_empty(state: &mut AppState) -> Vec<Command> {
    handle_event(
        state,
        &Event::SubmitSearch { title: None, genre: None, author: None },
    )
}

fn submit_title(state: &mut AppState, title: &str) -> Vec<Command> {
    handle_event(
        state,
        &Event::SubmitSearch {
            title: Some(title.to_string()),
            genre: None,
            author: None,
        },
    )
}

fn replaced(commands: &[Command]) -> &[Preview] {
    commands
        .iter()
        .find_map(|c| match c {
            Command::ReplaceList(previews) => Some(previews.as_slice()),
            _ => None,
        })
        .expect("batch carries no replace command")
}

fn appended(commands: &[Command]) -> &[Preview] {
    commands
        .iter()
        .find_map(|c| match c {
            Command::AppendList(previews) => Some(previews.as_slice()),
            _ => None,
        })
        .expect("batch carries no append command")
}

fn remaining_of(commands: &[Command]) -> usize {
    commands
        .iter()
        .find_map(|c| match c {
            Command::SetRemaining(n) => Some(*n),
            _ => None,
        })
        .expect("batch carries no remaining count")
}

fn disabled_of(commands: &[Command]) -> bool {
    commands
        .iter()
        .find_map(|c| match c {
            Command::SetShowMoreDisabled(flag) => Some(*flag),
            _ => None,
        })
        .expect("batch carries no disabled flag")
}

fn no_results_of(commands: &[Command]) -> Option<bool> {
    commands.iter().find_map(|c| match c {
        Command::SetNoResults(flag) => Some(*flag),
        _ => None,
    })
}

fn ids(previews: &[Preview]) -> Vec<&str> {
    previews.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn initial_state_matches_every_book() {
    let state = state_over(shelf_catalog());

    assert_eq!(state.matches.len(), state.catalog.books.len());
    assert!(state.criteria.is_unconstrained());
    assert!(state.overlay.is_none());
}

#[test]
fn submitting_empty_criteria_reveals_the_first_page() {
    let mut state = state_over(numbered_catalog(25, 20));
    let commands = submit_empty(&mut state);

    let shown = replaced(&commands);
    assert_eq!(shown.len(), 20);
    assert_eq!(shown.first().map(|p| p.id.as_str()), Some("id-1"));
    assert_eq!(shown.last().map(|p| p.id.as_str()), Some("id-20"));

    assert_eq!(remaining_of(&commands), 5);
    assert!(!disabled_of(&commands));
    assert_eq!(no_results_of(&commands), Some(false));
}

#[test]
fn show_more_appends_the_remainder_and_disables_the_control() {
    let mut state = state_over(numbered_catalog(25, 20));
    submit_empty(&mut state);

    let commands = handle_event(&mut state, &Event::ShowMore);

    let extra = appended(&commands);
    assert_eq!(ids(extra), vec!["id-21", "id-22", "id-23", "id-24", "id-25"]);
    assert_eq!(remaining_of(&commands), 0);
    assert!(disabled_of(&commands));

    // Append-only: nothing in the batch may rebuild or clear existing rows.
    assert!(!commands.iter().any(|c| matches!(c, Command::ReplaceList(_))));
    assert!(no_results_of(&commands).is_none());
}

#[test]
fn show_more_walks_a_long_result_page_by_page() {
    let mut state = state_over(numbered_catalog(45, 20));
    let first = submit_empty(&mut state);
    assert_eq!(remaining_of(&first), 25);

    let second = handle_event(&mut state, &Event::ShowMore);
    assert_eq!(appended(&second).len(), 20);
    assert_eq!(remaining_of(&second), 5);
    assert!(!disabled_of(&second));

    let third = handle_event(&mut state, &Event::ShowMore);
    assert_eq!(ids(appended(&third)), vec!["id-41", "id-42", "id-43", "id-44", "id-45"]);
    assert_eq!(remaining_of(&third), 0);
    assert!(disabled_of(&third));
}

#[test]
fn show_more_when_exhausted_is_ignored() {
    let mut state = state_over(numbered_catalog(25, 20));
    submit_empty(&mut state);
    handle_event(&mut state, &Event::ShowMore);

    let commands = handle_event(&mut state, &Event::ShowMore);

    assert!(commands.is_empty());
    assert_eq!(state.cursor.pages(), 2);
}

#[test]
fn a_single_page_result_disables_the_control_immediately() {
    let mut state = state_over(numbered_catalog(5, 20));
    let commands = submit_empty(&mut state);

    assert_eq!(replaced(&commands).len(), 5);
    assert_eq!(remaining_of(&commands), 0);
    assert!(disabled_of(&commands));
}

#[test]
fn title_filter_is_case_insensitive_substring() {
    let mut state = state_over(shelf_catalog());
    let commands = submit_title(&mut state, "the");

    let titles: Vec<&str> = replaced(&commands).iter().map(|p| p.title.as_str()).collect();
    assert!(titles.contains(&"The Hobbit"));
    assert!(titles.contains(&"The Left Hand of Darkness"));
    assert!(!titles.contains(&"Dune"));
}

#[test]
fn genre_filter_keeps_only_members_in_dataset_order() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(
        &mut state,
        &Event::SubmitSearch {
            title: None,
            genre: Some("scifi".to_string()),
            author: None,
        },
    );

    assert_eq!(ids(replaced(&commands)), vec!["b2", "b3"]);
}

#[test]
fn combined_filters_narrow_with_logical_and() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(
        &mut state,
        &Event::SubmitSearch {
            title: Some("the".to_string()),
            genre: Some("fantasy".to_string()),
            author: Some("tolkien".to_string()),
        },
    );

    assert_eq!(ids(replaced(&commands)), vec!["b1"]);
}

#[test]
fn zero_matches_render_an_empty_list_with_the_message() {
    let mut state = state_over(shelf_catalog());
    let commands = submit_title(&mut state, "zzz no such book");

    assert!(replaced(&commands).is_empty());
    assert_eq!(no_results_of(&commands), Some(true));
    assert_eq!(remaining_of(&commands), 0);
    assert!(disabled_of(&commands));
}

#[test]
fn a_new_filter_discards_previous_results_even_when_overlapping() {
    let mut state = state_over(numbered_catalog(25, 20));
    submit_empty(&mut state);
    handle_event(&mut state, &Event::ShowMore);
    assert_eq!(state.visible_range(), 0..25);

    // Identical criteria again: full replace from the first page, not a patch.
    let commands = submit_empty(&mut state);

    assert_eq!(replaced(&commands).len(), 20);
    assert_eq!(remaining_of(&commands), 5);
    assert_eq!(state.cursor.pages(), 1);
}

#[test]
fn resubmitting_identical_criteria_is_idempotent() {
    let mut state = state_over(shelf_catalog());
    let first = submit_title(&mut state, "the");
    let second = submit_title(&mut state, "the");

    assert_eq!(first, second);
}

#[test]
fn filtered_results_are_subsequences_of_the_dataset() {
    let catalog = shelf_catalog();
    let order: Vec<&str> = catalog.books.iter().map(|b| b.id.as_str()).collect();

    for (title, genre, author) in [
        (None, None, None),
        (Some("the"), None, None),
        (None, Some("fantasy"), None),
        (None, None, Some("leguin")),
        (Some("a"), Some("classic"), None),
    ] {
        let mut state = state_over(catalog.clone());
        let commands = handle_event(
            &mut state,
            &Event::SubmitSearch {
                title: title.map(str::to_string),
                genre: genre.map(str::to_string),
                author: author.map(str::to_string),
            },
        );

        let mut last_position = None;
        for preview in replaced(&commands) {
            let position = order.iter().position(|id| *id == preview.id).unwrap();
            if let Some(last) = last_position {
                assert!(position > last, "result left dataset order");
            }
            last_position = Some(position);
        }
    }
}

#[test]
fn previews_carry_resolved_author_names_and_match_ranges() {
    let mut state = state_over(numbered_catalog(3, 20));
    let commands = submit_title(&mut state, "book");

    let shown = replaced(&commands);
    assert_eq!(shown[0].author, "Jane Doe");
    assert_eq!(shown[0].title_match, Some((0, 4)));
}

#[test]
fn submitting_search_closes_the_overlay_and_scrolls_to_top() {
    let mut state = state_over(shelf_catalog());
    handle_event(&mut state, &Event::OpenSearch);
    assert_eq!(state.overlay, Some(Overlay::Search));

    let commands = submit_title(&mut state, "emma");

    assert!(state.overlay.is_none());
    assert!(commands.contains(&Command::CloseOverlay(Overlay::Search)));
    assert_eq!(commands.last(), Some(&Command::ScrollTop));
}

#[test]
fn selecting_a_preview_opens_the_detail_overlay() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(&mut state, &Event::SelectPreview { id: "b1".to_string() });

    let content = commands
        .iter()
        .find_map(|c| match c {
            Command::SetDetail(content) => Some(content),
            _ => None,
        })
        .expect("no detail content");

    assert_eq!(content.title, "The Hobbit");
    assert_eq!(content.subtitle, "J.R.R. Tolkien (1937)");
    assert_eq!(content.genres, vec!["Fantasy", "Classic"]);
    assert!(commands.contains(&Command::OpenOverlay(Overlay::Detail)));
    assert_eq!(state.overlay, Some(Overlay::Detail));
}

#[test]
fn selection_resolves_against_the_full_dataset_not_the_filtered_result() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(
        &mut state,
        &Event::SubmitSearch {
            title: None,
            genre: Some("scifi".to_string()),
            author: None,
        },
    );
    assert!(!ids(replaced(&commands)).contains(&"b1"));

    // A row rendered before the filter change still resolves.
    let detail = handle_event(&mut state, &Event::SelectPreview { id: "b1".to_string() });
    assert!(detail.contains(&Command::OpenOverlay(Overlay::Detail)));
}

#[test]
fn selecting_an_unknown_id_is_ignored() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(
        &mut state,
        &Event::SelectPreview { id: "never-rendered".to_string() },
    );

    assert!(commands.is_empty());
    assert!(state.overlay.is_none());
}

#[test]
fn open_and_cancel_events_mirror_each_overlay() {
    let mut state = state_over(shelf_catalog());

    let open = handle_event(&mut state, &Event::OpenSettings);
    assert_eq!(open, vec![Command::OpenOverlay(Overlay::Settings)]);
    assert_eq!(state.overlay, Some(Overlay::Settings));

    let cancel = handle_event(&mut state, &Event::CancelSettings);
    assert_eq!(cancel, vec![Command::CloseOverlay(Overlay::Settings)]);
    assert!(state.overlay.is_none());

    handle_event(&mut state, &Event::OpenSearch);
    let cancel = handle_event(&mut state, &Event::CancelSearch);
    assert_eq!(cancel, vec![Command::CloseOverlay(Overlay::Search)]);
    assert!(state.overlay.is_none());

    handle_event(&mut state, &Event::SelectPreview { id: "b1".to_string() });
    let close = handle_event(&mut state, &Event::CloseDetail);
    assert_eq!(close, vec![Command::CloseOverlay(Overlay::Detail)]);
    assert!(state.overlay.is_none());
}

#[test]
fn cancelling_search_leaves_results_untouched() {
    let mut state = state_over(shelf_catalog());
    submit_title(&mut state, "the");
    let matched_before = state.matches.clone();

    handle_event(&mut state, &Event::OpenSearch);
    let commands = handle_event(&mut state, &Event::CancelSearch);

    assert_eq!(state.matches, matched_before);
    assert!(!commands.iter().any(|c| matches!(c, Command::ReplaceList(_))));
}

#[test]
fn night_theme_swaps_the_palette_colors() {
    let mut state = state_over(shelf_catalog());
    let commands = handle_event(
        &mut state,
        &Event::SubmitSettings { theme: Some("night".to_string()) },
    );

    assert_eq!(state.theme_choice, ThemeChoice::Night);
    assert!(commands.contains(&Command::CloseOverlay(Overlay::Settings)));
    assert!(commands.contains(&Command::SetThemeColors {
        dark: "#ffffff".to_string(),
        light: "#0a0a14".to_string(),
    }));

    let back = handle_event(
        &mut state,
        &Event::SubmitSettings { theme: Some("day".to_string()) },
    );
    assert!(back.contains(&Command::SetThemeColors {
        dark: "#0a0a14".to_string(),
        light: "#ffffff".to_string(),
    }));
}

#[test]
fn missing_theme_value_defaults_to_day() {
    let mut state = state_over(shelf_catalog());
    state.theme_choice = ThemeChoice::Night;

    handle_event(&mut state, &Event::SubmitSettings { theme: None });

    assert_eq!(state.theme_choice, ThemeChoice::Day);
}

#[test]
fn theme_changes_do_not_disturb_list_state() {
    let mut state = state_over(numbered_catalog(25, 20));
    submit_empty(&mut state);
    handle_event(&mut state, &Event::ShowMore);

    let commands = handle_event(
        &mut state,
        &Event::SubmitSettings { theme: Some("night".to_string()) },
    );

    assert_eq!(state.visible_range(), 0..25);
    assert!(!commands.iter().any(|c| {
        matches!(c, Command::ReplaceList(_) | Command::AppendList(_) | Command::ScrollTop)
    }));
}
