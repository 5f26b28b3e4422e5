use log::info;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::ClassifierError;
use super::naive_bayes::MultinomialNb;
use super::vectorizer::TfidfVectorizer;
use crate::config::ClassifierConfig;
use crate::dataset::{BalancedCorpus, LabeledText};

/// Output of one training run: the fitted vectorizer and model plus the
/// rows that were held out from fitting.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub vectorizer: TfidfVectorizer,
    pub model: MultinomialNb,
    pub train_size: usize,
    pub holdout: BalancedCorpus,
}

impl TrainedModel {
    /// Fraction of holdout rows predicted correctly, or `None` when nothing
    /// was held out.
    pub fn evaluate(&self) -> Option<f64> {
        if self.holdout.is_empty() {
            return None;
        }
        let correct = self
            .holdout
            .examples()
            .iter()
            .filter(|example| self.model.predict(&self.vectorizer.transform(&example.text)) == example.label)
            .count();
        Some(correct as f64 / self.holdout.len() as f64)
    }
}

/// Splits `items` into `(train, test)` after a seeded shuffle. The test side
/// gets `ceil(test_fraction * n)` items.
pub fn train_test_split<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    test_fraction: f64,
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.shuffle(rng);

    let n_test = ((test_fraction * items.len() as f64).ceil() as usize).min(items.len());
    let (test, train) = order.split_at(n_test);
    (
        train.iter().map(|&i| items[i].clone()).collect(),
        test.iter().map(|&i| items[i].clone()).collect(),
    )
}

/// Splits the corpus, fits the vectorizer on the training texts only, and
/// fits the Naive Bayes model on the resulting rows.
///
/// # Errors
/// - `EmptyCorpus` if the corpus or its training partition is empty
/// - `TooFewCategories` if the corpus has fewer than 2 distinct labels
/// - `EmptyVocabulary` if the training texts contain no terms
pub fn train<R: Rng + ?Sized>(
    corpus: &BalancedCorpus,
    n_classes: usize,
    config: &ClassifierConfig,
    rng: &mut R,
) -> Result<TrainedModel, ClassifierError> {
    if corpus.is_empty() {
        return Err(ClassifierError::EmptyCorpus);
    }
    let distinct = corpus.distinct_labels();
    if distinct < 2 {
        return Err(ClassifierError::TooFewCategories(distinct));
    }

    let (train_rows, holdout_rows): (Vec<LabeledText>, Vec<LabeledText>) =
        train_test_split(corpus.examples(), config.test_fraction, rng);
    if train_rows.is_empty() {
        return Err(ClassifierError::EmptyCorpus);
    }
    info!(
        "Training on {} rows, holding out {}",
        train_rows.len(),
        holdout_rows.len()
    );

    let train_corpus = BalancedCorpus::new(train_rows);
    let texts = train_corpus.texts();
    let vectorizer = TfidfVectorizer::fit(&texts, config.ngram_range, config.max_features)?;
    let rows = vectorizer.transform_batch(&texts);
    let model = MultinomialNb::fit(
        &rows,
        &train_corpus.labels(),
        n_classes,
        vectorizer.vocabulary_size(),
        config.alpha,
    )?;

    Ok(TrainedModel {
        vectorizer,
        model,
        train_size: train_corpus.len(),
        holdout: BalancedCorpus::new(holdout_rows),
    })
}
