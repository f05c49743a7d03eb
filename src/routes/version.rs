use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::types::AppState;

#[derive(Serialize, ToSchema)]
pub struct VersionBody {
    /// Version of this service binary.
    pub service: String,
    /// Externally configured application version, if any.
    pub app_version: Option<String>,
}

#[utoipa::path(get, path = "/version", responses((status = 200, body = VersionBody)), tag = "System")]
pub async fn version(State(state): State<AppState>) -> Json<VersionBody> {
    Json(VersionBody {
        service: env!("CARGO_PKG_VERSION").to_string(),
        app_version: state.app_version.clone(),
    })
}
