use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::error::ClassifierError;
use super::naive_bayes::MultinomialNb;
use super::trainer::TrainedModel;
use super::vectorizer::{SparseVector, TfidfVectorizer};
use super::ClassifierInfo;
use crate::config::ClassifierConfig;
use crate::label::LabelEncoder;
use crate::text::clean_text;

/// A trained headline classifier: the fitted vectorizer, the Naive Bayes
/// model and the label encoding, bundled so they are always used together.
///
/// # Thread Safety
///
/// The fitted parts are immutable and held in `Arc`, so the classifier is
/// `Send + Sync`, cheap to clone, and safe to share across threads for
/// concurrent predictions:
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use headline_classifier::Classifier;
/// use std::sync::Arc;
/// use std::thread;
///
/// let classifier = Arc::new(Classifier::builder().build_from_path("news_sample.csv")?);
///
/// let classifier_clone = Arc::clone(&classifier);
/// thread::spawn(move || {
///     classifier_clone.predict("Team wins the title").unwrap();
/// });
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: Arc<TfidfVectorizer>,
    model: Arc<MultinomialNb>,
    encoder: Arc<LabelEncoder>,
    config: ClassifierConfig,
    train_size: usize,
    holdout_size: usize,
    holdout_accuracy: Option<f64>,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    pub(crate) fn new(
        trained: TrainedModel,
        encoder: LabelEncoder,
        config: ClassifierConfig,
        holdout_accuracy: Option<f64>,
    ) -> Self {
        Self {
            holdout_size: trained.holdout.len(),
            train_size: trained.train_size,
            vectorizer: Arc::new(trained.vectorizer),
            model: Arc::new(trained.model),
            encoder: Arc::new(encoder),
            config,
            holdout_accuracy,
        }
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> ClassifierInfo {
        ClassifierInfo {
            num_classes: self.encoder.len(),
            categories: self.encoder.classes().to_vec(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            train_size: self.train_size,
            holdout_size: self.holdout_size,
            holdout_accuracy: self.holdout_accuracy,
        }
    }

    /// Categories the classifier can return, in label-code order
    pub fn categories(&self) -> &[String] {
        self.encoder.classes()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &MultinomialNb {
        &self.model
    }

    /// Predicts the category of a raw headline.
    ///
    /// The headline is normalized the same way the training headlines were.
    /// Text with no known terms (including the empty string) still gets a
    /// category: the one with the highest prior.
    pub fn predict(&self, headline: &str) -> Result<String, ClassifierError> {
        let label = self.model.predict(&self.featurize(headline));
        self.decode(label)
    }

    /// Predicts the category and returns the posterior probability of every
    /// category alongside it.
    pub fn predict_with_scores(
        &self,
        headline: &str,
    ) -> Result<(String, HashMap<String, f64>), ClassifierError> {
        let row = self.featurize(headline);
        let label = self.model.predict(&row);
        let proba = self.model.predict_proba(&row);

        let mut scores = HashMap::with_capacity(proba.len());
        for (code, &p) in proba.iter().enumerate() {
            scores.insert(self.decode(code)?, p);
        }
        Ok((self.decode(label)?, scores))
    }

    fn featurize(&self, headline: &str) -> SparseVector {
        let cleaned = clean_text(headline);
        if cleaned.is_empty() {
            debug!("Headline {:?} is empty after cleaning, falling back to priors", headline);
        }
        self.vectorizer.transform(&cleaned)
    }

    fn decode(&self, label: usize) -> Result<String, ClassifierError> {
        self.encoder
            .decode(label)
            .map(str::to_string)
            .ok_or_else(|| ClassifierError::Prediction(format!("Label {} has no category", label)))
    }
}
