use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info};
use ndarray::Array1;

use super::error::ClassifierError;
use super::utils::normalize_vector;

/// A sparse feature row: `(feature index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    fn from_map(entries: BTreeMap<usize, f64>) -> Self {
        let (indices, values) = entries.into_iter().unzip();
        Self { indices, values }
    }

    /// Iterates over the non-zero entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// TF-IDF vectorizer over word n-grams.
///
/// The vocabulary is learned once by [`TfidfVectorizer::fit`] and never
/// changes afterwards; terms unseen at fit time are ignored by
/// [`TfidfVectorizer::transform`].
///
/// Weighting:
/// - term frequency is the raw count of the term in the text
/// - `idf(t) = ln((1 + n) / (1 + df(t))) + 1` over the `n` fitted documents
/// - every row is scaled to unit L2 norm
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Array1<f64>,
    ngram_range: (usize, usize),
}

impl TfidfVectorizer {
    /// Learns the vocabulary and IDF weights from `documents`.
    ///
    /// Only the `max_features` terms with the highest total count are kept,
    /// ties broken by term order. Feature indices follow term order.
    ///
    /// # Errors
    /// - `EmptyVocabulary` if no document yields a single term
    pub fn fit<S: AsRef<str>>(
        documents: &[S],
        ngram_range: (usize, usize),
        max_features: usize,
    ) -> Result<Self, ClassifierError> {
        let mut term_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();

        for document in documents {
            let terms = extract_terms(document.as_ref(), ngram_range);
            let mut seen: HashSet<&str> = HashSet::new();
            for term in &terms {
                *term_counts.entry(term.clone()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *doc_freqs.entry(term.clone()).or_insert(0) += 1;
                }
            }
        }

        if term_counts.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if ranked.len() > max_features {
            debug!("Keeping {} of {} terms", max_features, ranked.len());
            ranked.truncate(max_features);
        }

        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        let n_documents = documents.len() as f64;
        let idf = terms
            .iter()
            .map(|term| {
                let df = doc_freqs.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_documents) / (1.0 + df)).ln() + 1.0
            })
            .collect::<Array1<f64>>();

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term, i))
            .collect();

        info!(
            "Fitted TF-IDF vocabulary: {} terms from {} documents",
            vocabulary.len(),
            documents.len()
        );

        Ok(Self {
            vocabulary,
            idf,
            ngram_range,
        })
    }

    /// Converts text into a unit-length TF-IDF row. Text with no known
    /// terms gives an empty (all-zero) row.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in extract_terms(text, self.ngram_range) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, weight) in counts.iter_mut() {
            *weight *= self.idf[*index];
        }

        let mut row = SparseVector::from_map(counts);
        normalize_vector(&mut row.values);
        row
    }

    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }

    /// Terms in feature-index order.
    pub fn feature_names(&self) -> Vec<&str> {
        let mut names = vec![""; self.vocabulary.len()];
        for (term, &index) in &self.vocabulary {
            names[index] = term.as_str();
        }
        names
    }
}

/// Words of at least two characters, joined into n-grams for every `n` in
/// `ngram_range`.
fn extract_terms(text: &str, ngram_range: (usize, usize)) -> Vec<String> {
    let tokens: Vec<&str> = text
        .split_whitespace()
        .filter(|t| t.chars().count() >= 2)
        .collect();

    let (min_n, max_n) = ngram_range;
    let mut terms = Vec::new();
    for n in min_n.max(1)..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_terms() {
        assert_eq!(
            extract_terms("stocks rally a lot", (1, 2)),
            ["stocks", "rally", "lot", "stocks rally", "rally lot"]
        );
        assert_eq!(extract_terms("stocks rally", (2, 2)), ["stocks rally"]);
        assert!(extract_terms("", (1, 2)).is_empty());
        assert!(extract_terms("a b c", (1, 2)).is_empty());
    }

    #[test]
    fn test_vocabulary_sorted_and_capped() {
        let docs = ["apple banana", "apple cherry", "apple banana"];
        let vectorizer = TfidfVectorizer::fit(&docs, (1, 1), 2).unwrap();
        assert_eq!(vectorizer.feature_names(), ["apple", "banana"]);

        let all = TfidfVectorizer::fit(&docs, (1, 2), 100).unwrap();
        assert_eq!(
            all.feature_names(),
            ["apple", "apple banana", "apple cherry", "banana", "cherry"]
        );
    }

    #[test]
    fn test_smoothed_idf() {
        let docs = ["apple banana", "apple cherry", "apple"];
        let vectorizer = TfidfVectorizer::fit(&docs, (1, 1), 100).unwrap();
        let apple = vectorizer.vocabulary()["apple"];
        let banana = vectorizer.vocabulary()["banana"];
        assert!((vectorizer.idf()[apple] - 1.0).abs() < 1e-12);
        assert!((vectorizer.idf()[banana] - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_unit_norm_and_oov() {
        let docs = ["apple banana", "apple cherry"];
        let vectorizer = TfidfVectorizer::fit(&docs, (1, 2), 100).unwrap();

        let row = vectorizer.transform("apple banana durian");
        assert_eq!(row.nnz(), 3);
        let norm: f64 = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);

        let empty = vectorizer.transform("durian elderberry");
        assert!(empty.is_empty());
        assert!(vectorizer.transform("").is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let docs = ["", "a b"];
        assert!(matches!(
            TfidfVectorizer::fit(&docs, (1, 2), 100),
            Err(ClassifierError::EmptyVocabulary)
        ));
    }
}
