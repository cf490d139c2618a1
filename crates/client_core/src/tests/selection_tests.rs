use super::*;

fn rows(ids: std::ops::RangeInclusive<i64>) -> Vec<Artwork> {
    ids.map(Artwork::with_id).collect()
}

#[test]
fn toggle_presence_follows_parity_of_toggle_count() {
    let mut store = SelectionStore::new();
    let id = ArtworkId(42);

    for count in 1..=7 {
        let selected = store.toggle_row(id);
        assert_eq!(selected, count % 2 == 1);
        assert_eq!(store.is_selected(id), count % 2 == 1);
    }

    store.toggle_row(ArtworkId(7));
    store.toggle_row(id);
    assert!(!store.is_selected(id));
    assert!(store.is_selected(ArtworkId(7)));
}

#[test]
fn toggle_all_twice_restores_previous_state_for_page_ids() {
    let page = rows(1..=5);
    let mut store = SelectionStore::new();
    store.toggle_row(ArtworkId(2));
    store.toggle_row(ArtworkId(99));
    let before = store.clone();

    store.toggle_select_all_on_page(&page);
    assert!(store.all_selected(&page));
    assert!(store.is_selected(ArtworkId(99)));

    store.toggle_select_all_on_page(&page);
    assert!(!store.all_selected(&page));
    for row in &page {
        if row.id == ArtworkId(2) {
            continue;
        }
        assert_eq!(store.is_selected(row.id), before.is_selected(row.id));
    }
    // Deselect-all clears the whole page, including ids that were selected
    // before the first toggle.
    assert!(!store.is_selected(ArtworkId(2)));
    assert!(store.is_selected(ArtworkId(99)));
}

#[test]
fn toggle_all_from_fully_selected_page_round_trips_exactly() {
    let page = rows(1..=3);
    let mut store = SelectionStore::new();
    store.toggle_select_all_on_page(&page);
    let before = store.clone();

    store.toggle_select_all_on_page(&page);
    assert!(store.is_empty());
    store.toggle_select_all_on_page(&page);
    assert_eq!(store, before);
}

#[test]
fn select_first_n_is_additive_and_clamped() {
    let page = rows(11..=20);
    let mut store = SelectionStore::new();
    store.toggle_row(ArtworkId(1));
    store.toggle_row(ArtworkId(19));

    assert_eq!(store.select_first_n(&page, 3), 3);
    assert_eq!(
        store.selected_ids().collect::<Vec<_>>(),
        vec![
            ArtworkId(1),
            ArtworkId(11),
            ArtworkId(12),
            ArtworkId(13),
            ArtworkId(19)
        ]
    );

    assert_eq!(store.select_first_n(&page, 500), 6);
    assert!(store.all_selected(&page));
    assert!(store.is_selected(ArtworkId(1)));
    assert_eq!(store.select_first_n(&page, 0), 0);
    assert_eq!(store.len(), 11);
}

#[test]
fn select_all_is_false_for_empty_page() {
    let mut store = SelectionStore::new();
    assert!(!store.all_selected(&[]));

    store.toggle_select_all_on_page(&[]);
    assert!(store.is_empty());
    assert!(!store.all_selected(&[]));
}

#[test]
fn clear_empties_selection_and_label_reports_count() {
    let mut store = SelectionStore::new();
    store.select_first_n(&rows(1..=4), 4);
    assert_eq!(store.label(), "4 row(s) selected");

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.label(), "0 row(s) selected");
}

#[test]
fn parses_row_count_input() {
    assert_eq!(parse_row_count("3"), Some(3));
    assert_eq!(parse_row_count("  12 "), Some(12));
    assert_eq!(parse_row_count("0"), None);
    assert_eq!(parse_row_count("-4"), None);
    assert_eq!(parse_row_count(""), None);
    assert_eq!(parse_row_count("three"), None);
    assert_eq!(parse_row_count("2.5"), None);
}
