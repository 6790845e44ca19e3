use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::analysis;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api", analysis::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}
