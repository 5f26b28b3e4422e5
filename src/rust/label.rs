use std::collections::BTreeSet;

use serde::Serialize;

/// Bijection between category strings and the integer class codes used by
/// the model. Codes follow the lexicographic order of the categories, so the
/// same category set always yields the same codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Builds the encoding from the distinct categories in `categories`.
    pub fn fit<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = categories
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        Self {
            classes: distinct.into_iter().collect(),
        }
    }

    pub fn encode(&self, category: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(category))
            .ok()
    }

    pub fn decode(&self, label: usize) -> Option<&str> {
        self.classes.get(label).map(String::as_str)
    }

    /// Categories in code order (`classes()[i]` decodes label `i`).
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
