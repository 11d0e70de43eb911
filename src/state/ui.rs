#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell state: sidebar visibility and dark mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
        }
    }
}
