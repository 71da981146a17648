#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: theme, mobile menu, and the guest register prompt.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub register_prompt_open: bool,
}

impl UiState {
    /// Open the register prompt, closing the mobile menu underneath it.
    pub fn prompt_register(&mut self) {
        self.mobile_menu_open = false;
        self.register_prompt_open = true;
    }
}
