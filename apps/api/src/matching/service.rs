//! MatchService — runs tokenize → normalize → score for a pair of documents.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::matching::normalizer::{normalize, TokenSet};
use crate::matching::similarity::{JaccardScorer, MatchResult, SimilarityScorer};
use crate::matching::stopwords::StopwordSet;
use crate::matching::tokenizer::tokenize;

/// Only English is supported; stopword filtering assumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
}

/// Immutable input text. No identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        Language::English
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Missing required input: {}", .fields.join(", "))]
    MissingInput { fields: Vec<&'static str> },
}

/// Shared, cheaply clonable scoring pipeline.
///
/// The stopword set is captured once at construction and never changes for
/// the lifetime of the service.
#[derive(Clone)]
pub struct MatchService {
    stopwords: Arc<StopwordSet>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl MatchService {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self::with_scorer(stopwords, Arc::new(JaccardScorer))
    }

    pub fn with_scorer(stopwords: Arc<StopwordSet>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { stopwords, scorer }
    }

    pub fn backend(&self) -> &'static str {
        self.scorer.backend()
    }

    /// Scores the given description against the custom one.
    ///
    /// An absent document is an error; a present but empty one is scored
    /// normally (and may yield an insufficient-data result).
    pub fn compute_match(
        &self,
        given: Option<&TextDocument>,
        custom: Option<&TextDocument>,
    ) -> Result<MatchResult, MatchError> {
        match (given, custom) {
            (Some(given), Some(custom)) => Ok(self.score_documents(given, custom)),
            (given, custom) => {
                let fields = [
                    ("given_description", given.is_none()),
                    ("custom_description", custom.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(MatchError::MissingInput { fields })
            }
        }
    }

    pub fn score_documents(&self, a: &TextDocument, b: &TextDocument) -> MatchResult {
        let set_a = self.token_set(a);
        let set_b = self.token_set(b);
        let result = self.scorer.score(&set_a, &set_b);

        debug!(
            backend = self.scorer.backend(),
            language = ?a.language(),
            a_tokens = set_a.len(),
            b_tokens = set_b.len(),
            intersection = result.intersection_size,
            union = result.union_size,
            score = result.match_score,
            "Computed match score"
        );

        result
    }

    pub fn token_set(&self, doc: &TextDocument) -> TokenSet {
        normalize(tokenize(doc.as_str()), &self.stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MatchService {
        MatchService::new(Arc::new(StopwordSet::english()))
    }

    fn score(a: &str, b: &str) -> MatchResult {
        service().score_documents(&a.into(), &b.into())
    }

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "the a an",
        "Data",
        "Python developer with SQL skills",
        "Looking for a Python and SQL developer",
        "Senior Rust engineer — distributed systems, Kafka, Kubernetes.",
        "Ingénieur logiciel à Paris, expérience Rust",
        "!!! ??? ...",
    ];

    #[test]
    fn test_resume_against_job_description() {
        let result = score(
            "Python developer with SQL skills",
            "Looking for a Python and SQL developer",
        );
        assert_eq!(result.intersection_size, 3);
        assert_eq!(result.union_size, 5);
        assert!((result.match_score - 0.6).abs() < f64::EPSILON);
        assert!(!result.insufficient_data);
    }

    #[test]
    fn test_identical_nonempty_documents_score_one() {
        for text in SAMPLES {
            if service().token_set(&(*text).into()).is_empty() {
                continue;
            }
            assert_eq!(score(text, text).match_score, 1.0, "input: {text:?}");
        }
    }

    #[test]
    fn test_score_is_symmetric() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(score(a, b).match_score, score(b, a).match_score);
            }
        }
    }

    #[test]
    fn test_score_is_bounded_and_finite() {
        for a in SAMPLES {
            for b in SAMPLES {
                let s = score(a, b).match_score;
                assert!(s.is_finite());
                assert!((0.0..=1.0).contains(&s), "{a:?} vs {b:?} = {s}");
            }
        }
    }

    #[test]
    fn test_empty_documents_flag_insufficient_data() {
        let result = score("", "");
        assert_eq!(result.match_score, 0.0);
        assert!(result.insufficient_data);
    }

    #[test]
    fn test_stopword_only_documents_match_empty_documents() {
        assert_eq!(score("the a an", "the a an"), score("", ""));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("Data", "data").match_score, 1.0);
    }

    #[test]
    fn test_keyword_stuffing_does_not_inflate() {
        assert_eq!(
            score("rust rust rust rust go", "rust java"),
            score("rust go", "rust java")
        );
    }

    #[test]
    fn test_missing_given_description() {
        let custom = TextDocument::from("Rust engineer");
        let err = service().compute_match(None, Some(&custom)).unwrap_err();
        assert_eq!(
            err,
            MatchError::MissingInput {
                fields: vec!["given_description"]
            }
        );
    }

    #[test]
    fn test_missing_both_documents_names_both() {
        let err = service().compute_match(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required input: given_description, custom_description"
        );
    }

    #[test]
    fn test_present_but_empty_is_not_missing() {
        let empty = TextDocument::from("");
        let result = service().compute_match(Some(&empty), Some(&empty)).unwrap();
        assert!(result.insufficient_data);
    }

    #[test]
    fn test_custom_stopwords_are_isolated() {
        let custom = MatchService::new(Arc::new(StopwordSet::from_words(["rust"])));
        let a = TextDocument::from("rust go");
        let b = TextDocument::from("rust java");
        // "rust" is filtered only by the custom service
        assert_eq!(custom.score_documents(&a, &b).match_score, 0.0);
        assert!((service().score_documents(&a, &b).match_score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_scorer_is_used() {
        struct AlwaysOne;
        impl SimilarityScorer for AlwaysOne {
            fn score(&self, _a: &TokenSet, _b: &TokenSet) -> MatchResult {
                MatchResult {
                    match_score: 1.0,
                    intersection_size: 0,
                    union_size: 0,
                    insufficient_data: false,
                }
            }
            fn backend(&self) -> &'static str {
                "always-one"
            }
        }

        let svc = MatchService::with_scorer(Arc::new(StopwordSet::empty()), Arc::new(AlwaysOne));
        assert_eq!(svc.backend(), "always-one");
        assert_eq!(svc.score_documents(&"a".into(), &"b".into()).match_score, 1.0);
    }

    #[test]
    fn test_document_language_is_english() {
        assert_eq!(TextDocument::new("hola").language(), Language::English);
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let svc = service();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = svc.clone();
                std::thread::spawn(move || {
                    svc.score_documents(
                        &"Python developer with SQL skills".into(),
                        &"Looking for a Python and SQL developer".into(),
                    )
                })
            })
            .collect();
        for handle in handles {
            assert!((handle.join().unwrap().match_score - 0.6).abs() < f64::EPSILON);
        }
    }
}
