use log::debug;
use ndarray::{Array1, Array2, Axis};

use super::error::ClassifierError;
use super::utils::argmax;
use super::vectorizer::SparseVector;

/// Multinomial Naive Bayes over non-negative feature rows.
///
/// Fitting accumulates per-class feature weights, smooths them with
/// `alpha`, and stores `log P(feature | class)` in a
/// `[n_classes, n_features]` matrix next to the empirical `log P(class)`.
/// The fitted model is immutable.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    class_count: Array1<f64>,
    class_log_prior: Array1<f64>,
    feature_log_prob: Array2<f64>,
}

impl MultinomialNb {
    /// Fits the model on `samples` with class codes `labels` in `0..n_classes`.
    ///
    /// A class with no samples keeps a prior of zero and is never predicted.
    pub fn fit(
        samples: &[SparseVector],
        labels: &[usize],
        n_classes: usize,
        n_features: usize,
        alpha: f64,
    ) -> Result<Self, ClassifierError> {
        if samples.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }
        if samples.len() != labels.len() {
            return Err(ClassifierError::InvalidConfig(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }
        if let Some(&label) = labels.iter().find(|&&label| label >= n_classes) {
            return Err(ClassifierError::InvalidConfig(format!(
                "Label {} out of range for {} classes",
                label, n_classes
            )));
        }

        let mut class_count = Array1::<f64>::zeros(n_classes);
        let mut feature_count = Array2::<f64>::zeros((n_classes, n_features));
        for (sample, &label) in samples.iter().zip(labels) {
            class_count[label] += 1.0;
            for (index, value) in sample.iter() {
                feature_count[[label, index]] += value;
            }
        }

        let total = class_count.sum();
        let class_log_prior = class_count.mapv(|count| (count / total).ln());

        let smoothed = feature_count + alpha;
        let totals = smoothed.sum_axis(Axis(1));
        let mut feature_log_prob = smoothed.mapv(f64::ln);
        for (mut row, total) in feature_log_prob.axis_iter_mut(Axis(0)).zip(totals.iter()) {
            row -= total.ln();
        }

        debug!(
            "Fitted multinomial NB: {} classes, {} features, {} samples",
            n_classes,
            n_features,
            samples.len()
        );

        Ok(Self {
            class_count,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Unnormalized `log P(class) + sum_j x_j * log P(feature_j | class)`.
    pub fn joint_log_likelihood(&self, sample: &SparseVector) -> Array1<f64> {
        let mut jll = self.class_log_prior.clone();
        for (index, value) in sample.iter() {
            if index < self.n_features() {
                jll.scaled_add(value, &self.feature_log_prob.column(index));
            }
        }
        jll
    }

    /// Most likely class. An all-zero row falls back to the class with the
    /// highest prior.
    pub fn predict(&self, sample: &SparseVector) -> usize {
        argmax(self.joint_log_likelihood(sample).iter()).unwrap_or(0)
    }

    /// Posterior probability of every class.
    pub fn predict_proba(&self, sample: &SparseVector) -> Array1<f64> {
        let jll = self.joint_log_likelihood(sample);
        let max = jll.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let exp = jll.mapv(|v| (v - max).exp());
        let sum = exp.sum();
        exp / sum
    }

    pub fn n_classes(&self) -> usize {
        self.class_log_prior.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.ncols()
    }

    /// Training samples seen per class.
    pub fn class_count(&self) -> &Array1<f64> {
        &self.class_count
    }

    pub fn class_log_prior(&self) -> &Array1<f64> {
        &self.class_log_prior
    }

    pub fn feature_log_prob(&self) -> &Array2<f64> {
        &self.feature_log_prob
    }
}
