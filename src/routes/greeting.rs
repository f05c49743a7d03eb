use axum::extract::State;

use crate::types::AppState;

const GREETING: &str = "Greetings from Spring Boot!";

#[utoipa::path(get, path = "/", responses((status = 200, body = String, content_type = "text/plain")), tag = "Greeting")]
pub async fn greeting(State(state): State<AppState>) -> String {
    greeting_body(state.app_version.as_deref())
}

fn greeting_body(app_version: Option<&str>) -> String {
    match app_version {
        Some(version) => format!("{GREETING} - Version {version}"),
        None => GREETING.to_string(),
    }
}
