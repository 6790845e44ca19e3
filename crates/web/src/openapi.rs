use utoipa::OpenApi;

use crate::features::analysis::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analyze_rounds),
    components(
        schemas(
            analysis::dto::analyze::AnalyzeRequest,
            analysis::dto::analyze::AnalyzeResponse,
            analysis::models::RawRound,
            analysis::models::Timestamp,
        )
    ),
    tags(
        (name = "analysis", description = "Round analysis endpoints"),
    )
)]
pub struct ApiDoc;
