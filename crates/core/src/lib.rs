mod candidate;
pub use candidate::{Candidate, RankedResult, RawCandidate, SkillScores};

mod ranker;
pub use ranker::{DegeneratePolicy, RankError, Ranking, rank};

mod similarity;
pub use similarity::{SimilarityError, cosine_similarity};

mod source;
pub use source::CandidateSource;
