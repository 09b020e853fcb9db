use strum::{Display, EnumString};
use thiserror::Error;

use crate::{Candidate, RankedResult, SimilarityError, cosine_similarity};

/// What to do with a candidate whose similarity is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DegeneratePolicy {
  /// Fail the whole ranking on the first bad candidate
  #[default]
  Abort,
  /// Leave the candidate out and report its name in [`Ranking::skipped`]
  Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot score candidate `{candidate}`")]
pub struct RankError {
  pub candidate: String,
  #[source]
  pub source: SimilarityError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
  /// Scored candidates, highest similarity first
  pub results: Vec<RankedResult>,
  /// Names of candidates dropped under [`DegeneratePolicy::Skip`], in input order
  pub skipped: Vec<String>,
}

impl Ranking {
  #[must_use]
  pub fn into_results(self) -> Vec<RankedResult> {
    self.results
  }
}

/// Score every candidate against `query` and order them by descending similarity.
///
/// The sort is stable, so candidates with equal scores keep their input order.
///
/// # Errors
///
/// Under [`DegeneratePolicy::Abort`], returns the first candidate whose
/// similarity cannot be computed. [`DegeneratePolicy::Skip`] never fails.
pub fn rank<I>(query: &[f64], candidates: I, policy: DegeneratePolicy) -> Result<Ranking, RankError>
where
  I: IntoIterator<Item = Candidate>,
{
  let mut ranking = Ranking::default();

  for candidate in candidates {
    match cosine_similarity(&candidate.scores, query) {
      Ok(score) => ranking.results.push(RankedResult::new(candidate, score)),
      Err(_) if policy == DegeneratePolicy::Skip => ranking.skipped.push(candidate.name),
      Err(source) => {
        return Err(RankError {
          candidate: candidate.name,
          source,
        });
      }
    }
  }

  ranking
    .results
    .sort_by(|a, b| b.cos_sim.total_cmp(&a.cos_sim));

  Ok(ranking)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn names(ranking: &Ranking) -> Vec<&str> {
    ranking.results.iter().map(|r| r.name.as_str()).collect()
  }

  #[test]
  fn sample_profiles_rank_by_exact_cosine() {
    let ranking = rank(&[5.0, 5.0, 5.0], Candidate::samples(), DegeneratePolicy::Abort).unwrap();

    assert_eq!(names(&ranking), ["INT", "EARLY", "EXPERT"]);
    for result in &ranking.results {
      assert!(
        result.cos_sim > 0.9 && result.cos_sim < 1.0,
        "{} scored {}",
        result.name,
        result.cos_sim
      );
    }

    let expected = [0.976_458_208_6, 0.975_615_678_3, 0.956_102_070_8];
    for (result, expected) in ranking.results.iter().zip(expected) {
      assert!((result.cos_sim - expected).abs() < 1e-6, "{}", result.name);
    }
  }

  #[test]
  fn results_keep_candidate_scores() {
    let ranking = rank(&[5.0, 5.0, 5.0], Candidate::samples(), DegeneratePolicy::Abort).unwrap();
    let expert = ranking.results.iter().find(|r| r.name == "EXPERT").unwrap();
    assert_eq!(expert.scores, vec![17.0, 11.0, 24.0]);
  }

  #[test]
  fn ranking_is_a_descending_permutation() {
    let candidates = vec![
      Candidate::new("a", [1.0, 0.0, 0.0]),
      Candidate::new("b", [0.0, 1.0, 0.0]),
      Candidate::new("c", [1.0, 1.0, 1.0]),
      Candidate::new("d", [-1.0, -1.0, -1.0]),
      Candidate::new("e", [3.0, 2.0, 1.0]),
    ];
    let ranking = rank(&[1.0, 2.0, 3.0], candidates.clone(), DegeneratePolicy::Abort).unwrap();

    assert_eq!(ranking.results.len(), candidates.len());
    assert!(ranking.skipped.is_empty());

    let mut got = names(&ranking);
    got.sort_unstable();
    assert_eq!(got, ["a", "b", "c", "d", "e"]);

    for pair in ranking.results.windows(2) {
      assert!(pair[0].cos_sim >= pair[1].cos_sim);
    }
  }

  #[test]
  fn ties_keep_input_order() {
    let candidates = vec![
      Candidate::new("worst", [1.0, 0.0]),
      Candidate::new("zeta", [2.0, 2.0]),
      Candidate::new("alpha", [2.0, 2.0]),
      Candidate::new("mid", [2.0, 2.0]),
    ];
    let ranking = rank(&[1.0, 1.0], candidates, DegeneratePolicy::Abort).unwrap();
    assert_eq!(names(&ranking), ["zeta", "alpha", "mid", "worst"]);
  }

  #[test]
  fn zero_query_aborts() {
    let err = rank(&[0.0, 0.0, 0.0], Candidate::samples(), DegeneratePolicy::Abort).unwrap_err();
    assert_eq!(err.candidate, "EARLY");
    assert_eq!(err.source, SimilarityError::DegenerateVector);
  }

  #[test]
  fn zero_query_skips_everything() {
    let ranking = rank(&[0.0, 0.0, 0.0], Candidate::samples(), DegeneratePolicy::Skip).unwrap();
    assert!(ranking.results.is_empty());
    assert_eq!(ranking.skipped, ["EARLY", "INT", "EXPERT"]);
  }

  #[test]
  fn degenerate_candidate_aborts_without_partial_result() {
    let candidates = vec![
      Candidate::new("ok", [1.0, 2.0, 3.0]),
      Candidate::new("blank", [0.0, 0.0, 0.0]),
      Candidate::new("also-ok", [3.0, 2.0, 1.0]),
    ];
    let err = rank(&[1.0, 1.0, 1.0], candidates, DegeneratePolicy::Abort).unwrap_err();
    assert_eq!(err.candidate, "blank");
    assert_eq!(err.source, SimilarityError::DegenerateVector);
    assert_eq!(
      format!("{:#}", anyhow::Error::new(err)),
      "cannot score candidate `blank`: vector is all-zero"
    );
  }

  #[test]
  fn degenerate_candidate_is_skipped() {
    let candidates = vec![
      Candidate::new("ok", [1.0, 2.0, 3.0]),
      Candidate::new("blank", [0.0, 0.0, 0.0]),
      Candidate::new("also-ok", [3.0, 2.0, 1.0]),
    ];
    let ranking = rank(&[1.0, 2.0, 3.0], candidates, DegeneratePolicy::Skip).unwrap();
    assert_eq!(names(&ranking), ["ok", "also-ok"]);
    assert_eq!(ranking.skipped, ["blank"]);
  }

  #[test]
  fn short_query_matches_zero_padded_query() {
    let candidates = vec![Candidate::new("c", [1.0, 1.0, 1.0])];
    let short = rank(&[1.0, 1.0], candidates.clone(), DegeneratePolicy::Abort).unwrap();
    let padded = rank(&[1.0, 1.0, 0.0], candidates, DegeneratePolicy::Abort).unwrap();
    assert!((short.results[0].cos_sim - padded.results[0].cos_sim).abs() < 1e-12);
  }

  #[test]
  fn empty_candidate_list_ranks_to_nothing() {
    let ranking = rank(&[1.0, 2.0, 3.0], Vec::new(), DegeneratePolicy::Abort).unwrap();
    assert_eq!(ranking, Ranking::default());
  }

  #[test]
  fn policy_parses_case_insensitively() {
    assert_eq!("abort".parse::<DegeneratePolicy>().unwrap(), DegeneratePolicy::Abort);
    assert_eq!("SKIP".parse::<DegeneratePolicy>().unwrap(), DegeneratePolicy::Skip);
    assert!("ignore".parse::<DegeneratePolicy>().is_err());
    assert_eq!(DegeneratePolicy::Skip.to_string(), "skip");
  }
}
