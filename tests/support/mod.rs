use axum::Router;
use greeting_service::{app::build_router, types::AppState};

pub fn test_app(app_version: Option<&str>) -> Router {
    build_router(AppState {
        app_version: app_version.map(str::to_string),
    })
}
