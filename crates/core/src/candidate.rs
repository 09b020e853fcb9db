use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Target skill profile posted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ToSchema)]
pub struct SkillScores {
  /// Operations / DevOps proficiency
  #[serde(rename = "DevOpsScore", alias = "devOpsScore", alias = "devops_score")]
  pub devops: f64,
  /// Front-end proficiency
  #[serde(rename = "FeScore", alias = "feScore", alias = "fe_score")]
  pub fe: f64,
  /// Back-end proficiency
  #[serde(rename = "BeScore", alias = "beScore", alias = "be_score")]
  pub be: f64,
}

impl SkillScores {
  #[must_use]
  pub fn to_vector(&self) -> Vec<f64> {
    vec![self.devops, self.fe, self.be]
  }
}

/// One row of the candidate data file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCandidate {
  #[serde(default)]
  pub id: f64,
  pub name: String,
  pub devops: f64,
  pub fe: f64,
  pub be: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
  pub name: String,
  pub scores: Vec<f64>,
}

impl Candidate {
  pub fn new(name: impl Into<String>, scores: impl Into<Vec<f64>>) -> Self {
    Self {
      name: name.into(),
      scores: scores.into(),
    }
  }

  /// Profiles served when no candidate file is configured.
  #[must_use]
  pub fn samples() -> Vec<Self> {
    vec![
      Self::new("EARLY", [8.0, 13.0, 14.0]),
      Self::new("INT", [12.0, 17.0, 21.0]),
      Self::new("EXPERT", [17.0, 11.0, 24.0]),
    ]
  }
}

impl From<RawCandidate> for Candidate {
  fn from(raw: RawCandidate) -> Self {
    Self {
      name: raw.name,
      scores: vec![raw.devops, raw.fe, raw.be],
    }
  }
}

/// A candidate annotated with its similarity to one query.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RankedResult {
  /// Candidate scores as supplied
  pub scores: Vec<f64>,
  pub name: String,
  /// Cosine similarity to the query
  pub cos_sim: f64,
}

impl RankedResult {
  #[must_use]
  pub fn new(candidate: Candidate, cos_sim: f64) -> Self {
    Self {
      scores: candidate.scores,
      name: candidate.name,
      cos_sim,
    }
  }
}
