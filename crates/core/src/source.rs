use std::{path::PathBuf, sync::Arc};

use anyhow::Context;

use crate::{Candidate, RawCandidate};

/// Where the candidate list for a ranking request comes from.
#[derive(Debug, Clone)]
pub enum CandidateSource {
  /// JSON array of [`RawCandidate`], re-read on every request
  JsonFile(PathBuf),
  /// Fixed list handed in at startup
  InMemory(Arc<[Candidate]>),
}

impl CandidateSource {
  pub fn in_memory(candidates: impl Into<Arc<[Candidate]>>) -> Self {
    Self::InMemory(candidates.into())
  }

  /// Built-in sample profiles, used when no candidate file is configured.
  #[must_use]
  pub fn samples() -> Self {
    Self::in_memory(Candidate::samples())
  }

  pub async fn load(&self) -> anyhow::Result<Vec<Candidate>> {
    match self {
      Self::JsonFile(path) => {
        let data = tokio::fs::read(path)
          .await
          .with_context(|| format!("failed to read candidates from {}", path.display()))?;
        let raw: Vec<RawCandidate> = serde_json::from_slice(&data)
          .with_context(|| format!("failed to parse candidates in {}", path.display()))?;
        Ok(raw.into_iter().map(Candidate::from).collect())
      }
      Self::InMemory(candidates) => Ok(candidates.to_vec()),
    }
  }
}
