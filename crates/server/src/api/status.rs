use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::utils::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
  /// Value of `POD_NAME`, empty when unset
  pub pod_name: String,
}

/// Readiness probe
#[utoipa::path(
  get,
  path = "/status/ready",
  responses((status = 200, description = "Service accepts requests", body = String))
)]
pub async fn ready() -> Json<&'static str> {
  Json("OK")
}

/// Identify the instance serving the request
#[utoipa::path(
  get,
  path = "/status/about",
  responses((status = 200, description = "Instance details", body = About))
)]
#[axum::debug_handler]
pub async fn about(State(state): State<AppState>) -> Json<About> {
  Json(About {
    pod_name: state.env.pod_name.clone(),
  })
}
