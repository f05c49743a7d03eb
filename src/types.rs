/// Immutable per-process state shared with every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub app_version: Option<String>,
}
