//! Normalizer — case-folds tokens and removes stopwords, producing a `TokenSet`.

use std::collections::btree_set::{self, BTreeSet};

use crate::matching::stopwords::StopwordSet;

/// Deduplicated, lower-cased, stopword-free tokens of one document.
///
/// Term frequency is intentionally lost: repeating a keyword does not count twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.tokens.iter()
    }

    pub fn intersection_len(&self, other: &TokenSet) -> usize {
        self.tokens.intersection(&other.tokens).count()
    }

    pub fn union_len(&self, other: &TokenSet) -> usize {
        self.tokens.union(&other.tokens).count()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lower-cases each token, drops empties and stopwords, and collects the rest.
///
/// Accepts `Token`s or plain strings, so a `TokenSet` can be fed back in;
/// doing so returns the same set.
pub fn normalize<I, S>(tokens: I, stopwords: &StopwordSet) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref().trim();
            if token.is_empty() {
                return None;
            }
            let lowered = fold_apostrophes(&token.to_lowercase());
            (!stopwords.contains(&lowered)).then_some(lowered)
        })
        .collect();

    TokenSet { tokens }
}

/// Maps the typographic apostrophe (U+2019) to ASCII so `don’t` and `don't`
/// are the same token.
pub(crate) fn fold_apostrophes(word: &str) -> String {
    word.replace('\u{2019}', "'")
}
