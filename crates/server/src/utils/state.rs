use std::sync::Arc;

use skillrank_core::CandidateSource;
use skillrank_shared::AppEnv;

#[derive(Clone)]
pub struct AppState {
  pub env: Arc<AppEnv>,
  pub candidates: CandidateSource,
}

impl AppState {
  #[must_use]
  pub fn new(env: AppEnv, candidates: CandidateSource) -> Self {
    Self {
      env: Arc::new(env),
      candidates,
    }
  }

  /// Serve candidates from `CANDIDATES_PATH` when set, else the sample profiles.
  #[must_use]
  pub fn from_env(env: AppEnv) -> Self {
    let candidates = env
      .candidates_path
      .clone()
      .map_or_else(CandidateSource::samples, CandidateSource::JsonFile);
    Self::new(env, candidates)
  }
}
