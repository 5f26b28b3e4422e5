//! A news headline classifier built from a TF-IDF vectorizer and a
//! multinomial Naive Bayes model, trained at startup from a CSV file.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use headline_classifier::Classifier;
//!
//! let classifier = Classifier::builder()
//!     .with_categories(vec!["POLITICS", "ENTERTAINMENT", "BUSINESS", "SPORTS", "TECH"])
//!     .with_per_category_count(100)
//!     .with_random_seed(42)
//!     .build_from_path("news_sample.csv")?;
//!
//! let category = classifier.predict("Stocks rally after interest rate cut")?;
//! println!("Predicted category: {}", category);
//! # Ok(())
//! # }
//! ```
//!
//! # Pipeline
//!
//! 1. [`dataset::read_examples`] checks for the `headline` and `category`
//!    columns and reads the rows.
//! 2. [`dataset::prepare`] keeps the configured categories, samples the same
//!    number of rows from each with a seeded generator, normalizes the
//!    headlines with [`clean_text`] and encodes the labels.
//! 3. [`classifier::train`] splits off a holdout set, fits the
//!    [`TfidfVectorizer`] on the training texts and the [`MultinomialNb`]
//!    model on the resulting rows.
//! 4. [`Classifier::predict`] runs a raw headline through the same steps.
//!
//! Training is deterministic for a given dataset, configuration and seed.
//! A trained [`Classifier`] is immutable and can be shared across threads.

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod label;
pub mod text;

pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, MultinomialNb, SparseVector,
    TfidfVectorizer, TrainedModel,
};
pub use config::{ClassifierConfig, DEFAULT_CATEGORIES};
pub use dataset::{BalancedCorpus, LabeledText, RawExample};
pub use label::LabelEncoder;
pub use text::{clean_text, normalize};

/// Initializes `env_logger` from `RUST_LOG`. Call once per process.
pub fn init_logger() {
    env_logger::init();
}
