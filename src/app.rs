use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{openapi::ApiDoc, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::greeting::greeting))
        .route("/health", get(routes::health::health))
        .route("/version", get(routes::version::version))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
