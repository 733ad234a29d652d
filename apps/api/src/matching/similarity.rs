//! Similarity scoring — pluggable, trait-based scorer over two normalized token sets.
//!
//! Default: `JaccardScorer` (|a ∩ b| / |a ∪ b|).
//!
//! `MatchService` holds an `Arc<dyn SimilarityScorer>`, chosen at construction.

use serde::{Deserialize, Serialize};

use crate::matching::normalizer::TokenSet;

/// Outcome of comparing two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Always finite, 0.0 – 1.0
    pub match_score: f64,
    pub intersection_size: usize,
    pub union_size: usize,
    /// Both sides normalized to nothing; `match_score` is 0.0 by definition.
    pub insufficient_data: bool,
}

impl MatchResult {
    pub fn insufficient_data() -> Self {
        Self {
            match_score: 0.0,
            intersection_size: 0,
            union_size: 0,
            insufficient_data: true,
        }
    }
}

/// Implement this to swap the overlap metric without touching the service or handlers.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &TokenSet, b: &TokenSet) -> MatchResult;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Jaccard index over token sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardScorer;

impl SimilarityScorer for JaccardScorer {
    fn score(&self, a: &TokenSet, b: &TokenSet) -> MatchResult {
        let union_size = a.union_len(b);
        if union_size == 0 {
            return MatchResult::insufficient_data();
        }

        let intersection_size = a.intersection_len(b);
        let match_score = (intersection_size as f64 / union_size as f64).clamp(0.0, 1.0);

        MatchResult {
            match_score,
            intersection_size,
            union_size,
            insufficient_data: false,
        }
    }

    fn backend(&self) -> &'static str {
        "jaccard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize;
    use crate::matching::stopwords::StopwordSet;

    fn set(words: &[&str]) -> TokenSet {
        normalize(words.iter().copied(), &StopwordSet::empty())
    }

    #[test]
    fn test_both_empty_is_insufficient_data() {
        let result = JaccardScorer.score(&set(&[]), &set(&[]));
        assert_eq!(result.match_score, 0.0);
        assert!(result.insufficient_data);
        assert_eq!(result.union_size, 0);
    }

    #[test]
    fn test_one_side_empty_scores_zero_with_data() {
        let result = JaccardScorer.score(&set(&["rust"]), &set(&[]));
        assert_eq!(result.match_score, 0.0);
        assert!(!result.insufficient_data);
        assert_eq!(result.union_size, 1);
        assert_eq!(result.intersection_size, 0);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let result = JaccardScorer.score(&set(&["rust", "go"]), &set(&["java", "kotlin"]));
        assert_eq!(result.match_score, 0.0);
        assert_eq!(result.union_size, 4);
        assert!(!result.insufficient_data);
    }

    #[test]
    fn test_reflexive_on_nonempty() {
        let a = set(&["python", "sql"]);
        assert_eq!(JaccardScorer.score(&a, &a).match_score, 1.0);
    }

    #[test]
    fn test_symmetric() {
        let a = set(&["python", "developer", "sql", "skills"]);
        let b = set(&["looking", "python", "sql", "developer"]);
        assert_eq!(JaccardScorer.score(&a, &b), JaccardScorer.score(&b, &a));
    }

    #[test]
    fn test_three_of_five() {
        let a = set(&["python", "developer", "sql", "skills"]);
        let b = set(&["looking", "python", "sql", "developer"]);
        let result = JaccardScorer.score(&a, &b);
        assert_eq!(result.intersection_size, 3);
        assert_eq!(result.union_size, 5);
        assert!((result.match_score - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adding_shared_token_does_not_decrease_score() {
        let before = JaccardScorer.score(&set(&["rust", "go"]), &set(&["rust", "java"]));
        let after = JaccardScorer.score(
            &set(&["rust", "go", "sql"]),
            &set(&["rust", "java", "sql"]),
        );
        assert!(after.match_score >= before.match_score);
    }

    #[test]
    fn test_adding_unique_token_does_not_increase_score() {
        let before = JaccardScorer.score(&set(&["rust", "go"]), &set(&["rust", "java"]));
        let after = JaccardScorer.score(&set(&["rust", "go", "haskell"]), &set(&["rust", "java"]));
        assert!(after.match_score <= before.match_score);
    }

    #[test]
    fn test_backend_label_is_jaccard() {
        assert_eq!(JaccardScorer.backend(), "jaccard");
    }
}
