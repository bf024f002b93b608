use super::*;

// =============================================================
// searchable_text
// =============================================================

#[test]
fn searchable_text_lowercases_and_joins() {
    assert_eq!(
        searchable_text(&["Oak Table", "Solid oak", "dining"]),
        "oak table solid oak dining"
    );
}

#[test]
fn searchable_text_of_no_parts_is_empty() {
    assert_eq!(searchable_text::<&str>(&[]), "");
}

// =============================================================
// matches
// =============================================================

#[test]
fn empty_query_matches_everything() {
    assert!(matches("oak table", ""));
    assert!(matches("", ""));
}

#[test]
fn query_is_trimmed_and_lowercased() {
    assert!(matches("oak table", "  OAK "));
}

#[test]
fn non_substring_does_not_match() {
    assert!(!matches("oak table", "walnut"));
}

#[test]
fn visible_set_is_exactly_the_substring_matches() {
    let cards = [
        ["Oak Table", "Solid oak dining table"],
        ["Walnut Desk", "Writing desk"],
        ["Oak Shelf", "Wall shelf"],
    ];
    let visible: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, parts)| matches(&searchable_text(*parts), "oak"))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(visible, vec![0, 2]);
}

#[test]
fn zero_cards_yields_zero_visible() {
    let cards: [[&str; 2]; 0] = [];
    let visible = cards
        .iter()
        .filter(|parts| matches(&searchable_text(*parts), "anything"))
        .count();
    assert_eq!(visible, 0);
}
