use serde::Serialize;

mod error;
mod utils;
pub mod builder;
pub mod classifier;
pub mod naive_bayes;
pub mod trainer;
pub mod vectorizer;

pub use error::ClassifierError;
pub use classifier::Classifier;
pub use builder::ClassifierBuilder;
pub use naive_bayes::MultinomialNb;
pub use trainer::{train, train_test_split, TrainedModel};
pub use vectorizer::{SparseVector, TfidfVectorizer};

/// Information about the current state and configuration of a classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierInfo {
    /// Number of classes the classifier is trained on
    pub num_classes: usize,
    /// Category labels in label-code order
    pub categories: Vec<String>,
    /// Number of terms in the fitted vocabulary
    pub vocabulary_size: usize,
    /// Rows used to fit the vectorizer and the model
    pub train_size: usize,
    /// Rows held out from training
    pub holdout_size: usize,
    /// Accuracy on the holdout rows, if any were held out
    pub holdout_accuracy: Option<f64>,
}
