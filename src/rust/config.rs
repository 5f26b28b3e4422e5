use serde::Serialize;

use crate::classifier::ClassifierError;

/// Categories used when none are configured.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["POLITICS", "ENTERTAINMENT", "BUSINESS", "SPORTS", "TECH"];

/// Training configuration for a headline classifier.
///
/// Defaults: five categories, 100 headlines
/// sampled per category, a 20% holdout, unigrams and bigrams capped at
/// 10 000 features, and seed 42.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierConfig {
    pub categories: Vec<String>,
    pub per_category_count: usize,
    pub test_fraction: f64,
    pub max_features: usize,
    pub ngram_range: (usize, usize),
    pub random_seed: u64,
    /// Additive (Laplace) smoothing for the Naive Bayes model
    pub alpha: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            per_category_count: 100,
            test_fraction: 0.2,
            max_features: 10_000,
            ngram_range: (1, 2),
            random_seed: 42,
            alpha: 1.0,
        }
    }
}

impl ClassifierConfig {
    /// Checks every value is in range. Called by the builder before any
    /// dataset work starts.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.categories.len() < 2 {
            return Err(ClassifierError::TooFewCategories(self.categories.len()));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ClassifierError::InvalidConfig("Category label cannot be empty".into()));
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(ClassifierError::InvalidConfig(format!(
                    "Category '{}' is listed more than once",
                    category
                )));
            }
        }
        if self.per_category_count == 0 {
            return Err(ClassifierError::InvalidConfig(
                "per_category_count must be at least 1".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(ClassifierError::InvalidConfig(format!(
                "test_fraction must be in [0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.max_features == 0 {
            return Err(ClassifierError::InvalidConfig("max_features must be at least 1".into()));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ClassifierError::InvalidConfig(format!(
                "Invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        if self.alpha.is_nan() || self.alpha <= 0.0 {
            return Err(ClassifierError::InvalidConfig(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
