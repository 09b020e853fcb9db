use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimilarityError {
  /// Sum of squares of one side is zero, so the vector has no direction.
  #[error("vector is all-zero")]
  DegenerateVector,
  #[error("vector contains a non-finite component or overflows")]
  NonFinite,
}

/// Compute cosine similarity between two score vectors.
///
/// Vectors of unequal length are compared as if the shorter one were padded
/// with trailing zeros. Returns a value in [-1.0, 1.0] where 1.0 means
/// identical direction.
///
/// # Errors
///
/// [`SimilarityError::DegenerateVector`] when either side sums to zero
/// (this includes empty vectors), [`SimilarityError::NonFinite`] when an
/// input or intermediate sum is NaN or infinite.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
  let count = a.len().max(b.len());

  let mut dot = 0.0_f64;
  let mut sum_a = 0.0_f64;
  let mut sum_b = 0.0_f64;

  for k in 0..count {
    match (a.get(k), b.get(k)) {
      (Some(&x), Some(&y)) => {
        dot = x.mul_add(y, dot);
        sum_a = x.mul_add(x, sum_a);
        sum_b = y.mul_add(y, sum_b);
      }
      (Some(&x), None) => sum_a = x.mul_add(x, sum_a),
      (None, Some(&y)) => sum_b = y.mul_add(y, sum_b),
      (None, None) => unreachable!("index is below the longer length"),
    }
  }

  if !(dot.is_finite() && sum_a.is_finite() && sum_b.is_finite()) {
    return Err(SimilarityError::NonFinite);
  }
  if sum_a == 0.0 || sum_b == 0.0 {
    return Err(SimilarityError::DegenerateVector);
  }

  let cosine = dot / (sum_a.sqrt() * sum_b.sqrt());
  if cosine.is_finite() {
    Ok(cosine)
  } else {
    Err(SimilarityError::NonFinite)
  }
}
