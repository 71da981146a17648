use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_overlays_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.register_prompt_open);
}

// =============================================================
// prompt_register
// =============================================================

#[test]
fn prompt_register_closes_mobile_menu() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.prompt_register();
    assert!(state.register_prompt_open);
    assert!(!state.mobile_menu_open);
}
