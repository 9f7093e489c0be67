// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Search box contents, as typed (the filter keeps the normalized copy)
    pub search_text: String,

    /// Entity shown in the detail panel
    pub selected_id: Option<String>,

    /// Export path text box; mapped onto ExportOptions on use
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 720,
            search_text: s!(),
            selected_id: None,
            out_path_text: s!(),
            out_path_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
