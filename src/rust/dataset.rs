//! Loading and balancing of labeled headlines.
//!
//! The dataset is a CSV file with a header row carrying at least a
//! `headline` and a `category` column. Column presence is checked once when
//! the header is read; rows are then deserialized into [`RawExample`]s and
//! reduced to a [`BalancedCorpus`] by [`prepare`].

use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::{debug, info};
use rand::Rng;
use serde::Deserialize;

use crate::classifier::ClassifierError;
use crate::label::LabelEncoder;
use crate::text::normalize;

/// Environment variable consulted when no dataset path is given.
pub const DATASET_ENV_VAR: &str = "HEADLINE_DATASET";
/// Dataset file looked up in the working directory as a last resort.
pub const DEFAULT_DATASET_FILE: &str = "news_sample.csv";

const REQUIRED_COLUMNS: [&str; 2] = ["headline", "category"];

/// One row of the source dataset. Any other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawExample {
    pub headline: Option<String>,
    pub category: Option<String>,
}

impl RawExample {
    pub fn new(headline: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            headline: Some(headline.into()),
            category: Some(category.into()),
        }
    }
}

/// A normalized headline with its encoded category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub text: String,
    pub label: usize,
}

/// Normalized training examples with the same number of rows per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancedCorpus {
    examples: Vec<LabeledText>,
}

impl BalancedCorpus {
    pub fn new(examples: Vec<LabeledText>) -> Self {
        Self { examples }
    }

    pub fn examples(&self) -> &[LabeledText] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<usize> {
        self.examples.iter().map(|e| e.label).collect()
    }

    /// Number of rows per label.
    pub fn label_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for example in &self.examples {
            *counts.entry(example.label).or_insert(0) += 1;
        }
        counts
    }

    pub fn distinct_labels(&self) -> usize {
        self.label_counts().len()
    }
}

/// Resolves the dataset location: the explicit path if given, else the
/// `HEADLINE_DATASET` environment variable, else `news_sample.csv`.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = env::var(DATASET_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(DEFAULT_DATASET_FILE)
}

/// Reads every example from a CSV file.
pub fn load_examples<P: AsRef<Path>>(path: P) -> Result<Vec<RawExample>, ClassifierError> {
    let path = path.as_ref();
    info!("Loading dataset from {:?}", path);
    let file = File::open(path)?;
    read_examples(file)
}

/// Reads every example from CSV data. Fails with
/// [`ClassifierError::MissingColumn`] before reading any row if the header
/// lacks `headline` or `category`.
pub fn read_examples<R: Read>(reader: R) -> Result<Vec<RawExample>, ClassifierError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ClassifierError::MissingColumn(column.to_string()));
        }
    }

    let examples = reader
        .deserialize()
        .collect::<Result<Vec<RawExample>, csv::Error>>()?;
    debug!("Read {} rows", examples.len());
    Ok(examples)
}

/// Keeps the examples whose category is one of `categories`.
pub fn filter_categories<'a>(
    examples: &'a [RawExample],
    categories: &'a [String],
) -> impl Iterator<Item = &'a RawExample> + 'a {
    examples.iter().filter(move |example| {
        example
            .category
            .as_deref()
            .is_some_and(|c| categories.iter().any(|allowed| allowed == c))
    })
}

/// Groups examples by category. Examples without a category are skipped.
pub fn group_by_category<'a, I>(examples: I) -> BTreeMap<&'a str, Vec<&'a RawExample>>
where
    I: IntoIterator<Item = &'a RawExample>,
{
    let mut groups: BTreeMap<&str, Vec<&RawExample>> = BTreeMap::new();
    for example in examples {
        if let Some(category) = example.category.as_deref() {
            groups.entry(category).or_default().push(example);
        }
    }
    groups
}

/// Draws exactly `count` distinct rows from `group`. The caller checks
/// `count <= group.len()`.
pub fn sample_group<'a, R: Rng + ?Sized>(
    group: &[&'a RawExample],
    count: usize,
    rng: &mut R,
) -> Vec<&'a RawExample> {
    rand::seq::index::sample(rng, group.len(), count)
        .into_iter()
        .map(|i| group[i])
        .collect()
}

/// Filters, balances and normalizes the examples.
///
/// Every category in `categories` contributes exactly `per_category_count`
/// rows drawn with `rng`, so a fixed seed always selects the same rows.
///
/// # Errors
/// - `TooFewCategories` if fewer than 2 configured categories occur
/// - `InsufficientSamples` if a configured category has fewer rows than requested
pub fn prepare<R: Rng + ?Sized>(
    examples: &[RawExample],
    categories: &[String],
    per_category_count: usize,
    rng: &mut R,
) -> Result<(BalancedCorpus, LabelEncoder), ClassifierError> {
    let groups = group_by_category(filter_categories(examples, categories));
    info!(
        "{} of {} rows match the configured categories",
        groups.values().map(Vec::len).sum::<usize>(),
        examples.len()
    );

    if groups.len() < 2 {
        return Err(ClassifierError::TooFewCategories(groups.len()));
    }
    for category in categories {
        let available = groups.get(category.as_str()).map_or(0, Vec::len);
        if available < per_category_count {
            return Err(ClassifierError::InsufficientSamples {
                category: category.clone(),
                available,
                required: per_category_count,
            });
        }
    }

    let encoder = LabelEncoder::fit(groups.keys());
    let mut rows = Vec::with_capacity(groups.len() * per_category_count);
    // Groups iterate in sorted order, the same order the encoder assigns codes.
    for (label, (category, group)) in groups.iter().enumerate() {
        debug_assert_eq!(encoder.encode(category), Some(label));
        debug!("Sampling {} of {} rows for '{}'", per_category_count, group.len(), category);
        for example in sample_group(group, per_category_count, rng) {
            rows.push(LabeledText {
                text: normalize(example.headline.as_deref()),
                label,
            });
        }
    }

    Ok((BalancedCorpus::new(rows), encoder))
}
