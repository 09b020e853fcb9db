use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod analysis;
mod status;

pub use analysis::SKIPPED_CANDIDATES_HEADER;
pub use status::About;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Skillrank API",
    version = "0.0.1",
    description = "Rank candidate skill profiles by cosine similarity"
  ),
  paths(analysis::analysis, status::ready, status::about),
  components(schemas(
    About,
    skillrank_core::SkillScores,
    skillrank_core::RankedResult,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/analysis", post(analysis::analysis))
    .route("/status/ready", get(status::ready))
    .route("/status/about", get(status::about))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
