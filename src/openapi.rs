use utoipa::OpenApi;

use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::greeting::greeting,

        routes::health::health,
        routes::version::version,
    ),
    components(schemas(routes::version::VersionBody)),
    tags(
        (name = "Greeting"),
        (name = "System"),
    )
)]
pub struct ApiDoc;
