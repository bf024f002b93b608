use super::*;

#[test]
fn all_panels_start_closed() {
    let state = AccordionState::default();
    assert!(!state.is_open(0));
    assert!(!state.is_open(1));
}

#[test]
fn toggle_opens_a_closed_panel() {
    let mut state = AccordionState::default();
    state.toggle(1);
    assert!(state.is_open(1));
}

#[test]
fn toggle_closes_an_open_panel() {
    let mut state = AccordionState::default();
    state.toggle(1);
    state.toggle(1);
    assert!(!state.is_open(1));
}

#[test]
fn opening_b_while_a_is_open_leaves_only_b_open() {
    let mut state = AccordionState::default();
    state.toggle(0);
    state.toggle(1);
    assert!(!state.is_open(0));
    assert!(state.is_open(1));
}
