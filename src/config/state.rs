// src/config/state.rs
use crate::filter::FilterState;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Directory table sort: column index + direction
    pub sort_col: Option<usize>,
    pub sort_ascending: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            sort_col: None,
            sort_ascending: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub filter: FilterState,
    pub gui: GuiState,
}
