use axum::{
  Json,
  extract::State,
  http::{HeaderMap, HeaderValue, StatusCode},
};
use skillrank_core::{RankedResult, SkillScores, rank};
use skillrank_shared::AppError;

use crate::utils::AppState;

/// Comma-separated names of candidates left out under the skip policy.
pub const SKIPPED_CANDIDATES_HEADER: &str = "x-skipped-candidates";

/// Rank candidates by similarity to a skill profile
#[utoipa::path(
  post,
  path = "/analysis",
  request_body = SkillScores,
  responses(
    (status = 200, description = "Candidates, most similar first", body = Vec<RankedResult>),
    (status = 400, description = "Malformed request body"),
    (status = 422, description = "Similarity is undefined for the profile or a candidate")
  )
)]
#[axum::debug_handler]
pub async fn analysis(
  State(state): State<AppState>,
  Json(payload): Json<SkillScores>,
) -> Result<(HeaderMap, Json<Vec<RankedResult>>), AppError> {
  let candidates = state.candidates.load().await?;
  let total = candidates.len();

  let ranking = rank(&payload.to_vector(), candidates, state.env.degenerate_policy)
    .map_err(|err| AppError::with_status(StatusCode::UNPROCESSABLE_ENTITY, err))?;

  tracing::debug!(
    candidates = total,
    ranked = ranking.results.len(),
    skipped = ranking.skipped.len(),
    "ranked candidates"
  );

  let mut headers = HeaderMap::new();
  if !ranking.skipped.is_empty() {
    let skipped = ranking.skipped.join(",");
    tracing::warn!(%skipped, "skipped candidates with undefined similarity");
    if let Ok(value) = HeaderValue::from_str(&skipped) {
      headers.insert(SKIPPED_CANDIDATES_HEADER, value);
    }
  }

  Ok((headers, Json(ranking.into_results())))
}
