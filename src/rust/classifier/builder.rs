use std::io::Read;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::classifier::Classifier;
use super::error::ClassifierError;
use super::trainer::train;
use crate::config::ClassifierConfig;
use crate::dataset::{self, RawExample};

/// A builder for training a Classifier with a fluent interface.
///
/// Every setting defaults to [`ClassifierConfig::default`]. Nothing is
/// checked until one of the `build*` methods runs, which validates the
/// configuration before touching any data and fails without producing a
/// model if the dataset does not satisfy it.
///
/// # Example
/// ```no_run
/// use headline_classifier::Classifier;
///
/// let classifier = Classifier::builder()
///     .with_per_category_count(100)
///     .with_random_seed(42)
///     .build_from_path("news_sample.csv")?;
/// println!("{}", classifier.predict("Stocks rally after interest rate cut")?);
/// # Ok::<(), headline_classifier::ClassifierError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassifierBuilder {
    config: ClassifierConfig,
}

impl ClassifierBuilder {
    /// Creates a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the categories to keep; rows with any other category are dropped
    ///
    /// # Example
    /// ```
    /// use headline_classifier::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_categories(vec!["SPORTS", "TECH"]);
    /// assert_eq!(builder.config().categories, ["SPORTS", "TECH"]);
    /// ```
    pub fn with_categories(mut self, categories: Vec<impl Into<String>>) -> Self {
        self.config.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how many headlines are sampled per category
    pub fn with_per_category_count(mut self, count: usize) -> Self {
        self.config.per_category_count = count;
        self
    }

    /// Sets the fraction of the balanced corpus held out from training
    pub fn with_test_fraction(mut self, fraction: f64) -> Self {
        self.config.test_fraction = fraction;
        self
    }

    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.config.max_features = max_features;
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.config.ngram_range = (min_n, max_n);
        self
    }

    /// Sets the seed for sampling and splitting
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    /// Sets the Naive Bayes smoothing parameter
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Loads the CSV at `path` and trains on it.
    ///
    /// # Errors
    /// - `InvalidConfig` / `TooFewCategories` for a bad configuration
    /// - `Io` if the file cannot be opened
    /// - `MissingColumn` if the header lacks `headline` or `category`
    /// - everything [`ClassifierBuilder::build`] returns
    pub fn build_from_path<P: AsRef<Path>>(self, path: P) -> Result<Classifier, ClassifierError> {
        self.config.validate()?;
        let examples = dataset::load_examples(path)?;
        self.build(&examples)
    }

    /// Reads CSV data from `reader` and trains on it.
    pub fn build_from_reader<R: Read>(self, reader: R) -> Result<Classifier, ClassifierError> {
        self.config.validate()?;
        let examples = dataset::read_examples(reader)?;
        self.build(&examples)
    }

    /// Balances `examples`, splits them, and fits the vectorizer and model.
    ///
    /// A single seeded generator drives both the per-category sampling and
    /// the train/holdout split, so identical inputs give identical models.
    pub fn build(self, examples: &[RawExample]) -> Result<Classifier, ClassifierError> {
        self.config.validate()?;
        info!(
            "Building classifier: {} categories, {} per category, seed {}",
            self.config.categories.len(),
            self.config.per_category_count,
            self.config.random_seed
        );

        let mut rng = StdRng::seed_from_u64(self.config.random_seed);
        let (corpus, encoder) = dataset::prepare(
            examples,
            &self.config.categories,
            self.config.per_category_count,
            &mut rng,
        )?;
        let trained = train(&corpus, encoder.len(), &self.config, &mut rng)?;

        let holdout_accuracy = trained.evaluate();
        match holdout_accuracy {
            Some(accuracy) => info!(
                "Classifier ready: {} terms, holdout accuracy {:.1}% on {} rows",
                trained.vectorizer.vocabulary_size(),
                accuracy * 100.0,
                trained.holdout.len()
            ),
            None => info!(
                "Classifier ready: {} terms, no holdout",
                trained.vectorizer.vocabulary_size()
            ),
        }

        Ok(Classifier::new(trained, encoder, self.config, holdout_accuracy))
    }
}
