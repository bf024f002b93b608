use super::*;

fn three_item_group() -> LightboxGroups {
    LightboxGroups::from_links([
        (Some("gallery"), "a.jpg", "A"),
        (Some("gallery"), "b.jpg", "B"),
        (Some("gallery"), "c.jpg", "C"),
    ])
}

// =============================================================
// Group building
// =============================================================

#[test]
fn links_without_a_key_share_the_default_group() {
    let groups = LightboxGroups::from_links([
        (None, "a.jpg", "A"),
        (None, "b.jpg", "B"),
        (Some("other"), "c.jpg", "C"),
    ]);
    assert_eq!(groups.len(DEFAULT_GROUP), 2);
    assert_eq!(groups.len("other"), 1);
}

#[test]
fn group_order_follows_input_order() {
    let groups = three_item_group();
    let items = groups.items("gallery").unwrap();
    assert_eq!(items[0].title, "A");
    assert_eq!(items[2].title, "C");
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn starts_closed() {
    assert!(!LightboxState::default().is_open());
}

#[test]
fn open_displays_the_target_item() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 1);
    assert!(state.is_open());
    assert_eq!(state.current(&groups).unwrap().href, "b.jpg");
}

#[test]
fn open_out_of_range_is_ignored() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 3);
    state.open(&groups, "missing", 0);
    assert!(!state.is_open());
}

#[test]
fn close_clears_the_displayed_item() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 0);
    state.close();
    assert!(!state.is_open());
    assert!(state.current(&groups).is_none());
}

// =============================================================
// Navigation with circular wrap
// =============================================================

#[test]
fn next_twice_from_zero_reaches_two_then_wraps() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 0);
    state.next(&groups);
    state.next(&groups);
    assert_eq!(state.index(), Some(2));
    state.next(&groups);
    assert_eq!(state.index(), Some(0));
}

#[test]
fn prev_from_zero_wraps_to_last() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 0);
    state.prev(&groups);
    assert_eq!(state.index(), Some(2));
}

#[test]
fn single_item_group_wraps_onto_itself() {
    let groups = LightboxGroups::from_links([(Some("solo"), "only.jpg", "Only")]);
    let mut state = LightboxState::default();
    state.open(&groups, "solo", 0);
    state.next(&groups);
    assert_eq!(state.index(), Some(0));
    state.prev(&groups);
    assert_eq!(state.index(), Some(0));
}

// =============================================================
// Keyboard actions
// =============================================================

#[test]
fn key_action_maps_navigation_keys() {
    assert_eq!(key_action("Escape"), Some(LightboxAction::Close));
    assert_eq!(key_action("ArrowLeft"), Some(LightboxAction::Prev));
    assert_eq!(key_action("ArrowRight"), Some(LightboxAction::Next));
    assert_eq!(key_action("Enter"), None);
}

#[test]
fn actions_while_closed_are_no_ops() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.apply(LightboxAction::Next, &groups);
    state.apply(LightboxAction::Close, &groups);
    assert!(!state.is_open());
}

#[test]
fn escape_action_closes() {
    let groups = three_item_group();
    let mut state = LightboxState::default();
    state.open(&groups, "gallery", 2);
    state.apply(LightboxAction::Close, &groups);
    assert!(!state.is_open());
}
