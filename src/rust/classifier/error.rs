use std::io;

/// Represents the different types of errors that can occur while preparing
/// data, training, or predicting with the headline classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The dataset header lacks a required column
    #[error("Dataset must have '{0}' column")]
    MissingColumn(String),
    /// A configured category has fewer rows than requested per category
    #[error("Category '{category}' has {available} rows, {required} required")]
    InsufficientSamples {
        category: String,
        available: usize,
        required: usize,
    },
    /// Fewer than two categories remain after filtering
    #[error("At least 2 categories are required, found {0}")]
    TooFewCategories(usize),
    /// Nothing left to train on
    #[error("Training corpus is empty")]
    EmptyCorpus,
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Every training document was empty after tokenization
    #[error("Empty vocabulary: training texts contain no usable terms")]
    EmptyVocabulary,
    /// The CSV could not be parsed
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error occurred while making predictions
    #[error("Prediction error: {0}")]
    Prediction(String),
}

impl ClassifierError {
    /// True for errors caused by the dataset or configuration not matching
    /// each other. These stop training; no model is produced.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_)
                | Self::InsufficientSamples { .. }
                | Self::TooFewCategories(_)
                | Self::EmptyCorpus
                | Self::InvalidConfig(_)
        )
    }
}
