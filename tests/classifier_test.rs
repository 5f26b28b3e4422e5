mod common;

use headline_classifier::dataset::prepare;
use headline_classifier::{Classifier, ClassifierConfig, DEFAULT_CATEGORIES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;

fn setup_test_classifier() -> Classifier {
    Classifier::builder()
        .with_per_category_count(100)
        .with_random_seed(42)
        .build_from_reader(common::balanced_csv(150).as_bytes())
        .expect("Failed to create classifier")
}

#[test]
fn test_end_to_end_classification() -> Result<(), Box<dyn std::error::Error>> {
    let classifier = setup_test_classifier();

    let category = classifier.predict("Stocks rally after interest rate cut")?;
    assert_eq!(category, "BUSINESS");

    assert_eq!(classifier.predict("Coach says team wins the championship")?, "SPORTS");
    assert_eq!(classifier.predict("Senate vote on election bill")?, "POLITICS");
    assert_eq!(classifier.predict("Startup unveils robot and cloud app")?, "TECH");
    assert_eq!(classifier.predict("Movie star skips film premiere")?, "ENTERTAINMENT");
    Ok(())
}

#[test]
fn test_training_split_sizes() {
    let classifier = setup_test_classifier();
    let info = classifier.info();
    assert_eq!(info.num_classes, 5);
    assert_eq!(info.train_size + info.holdout_size, 500);
    assert_eq!(info.holdout_size, 100);
    assert!(info.vocabulary_size > 0 && info.vocabulary_size <= 10_000);
    assert!(info.holdout_accuracy.unwrap() >= 0.9);
}

#[test]
fn test_categories_sorted() {
    let classifier = setup_test_classifier();
    assert_eq!(
        classifier.categories(),
        ["BUSINESS", "ENTERTAINMENT", "POLITICS", "SPORTS", "TECH"]
    );
}

#[test]
fn test_training_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let first = setup_test_classifier();
    let second = setup_test_classifier();

    assert_eq!(first.encoder(), second.encoder());
    assert_eq!(first.info(), second.info());
    assert_eq!(first.vectorizer().vocabulary(), second.vectorizer().vocabulary());

    let headlines = [
        "Stocks rally after interest rate cut",
        "Big game tonight",
        "Festival lineup announced",
        "Nothing in the vocabulary here",
        "",
    ];
    for headline in headlines {
        assert_eq!(first.predict(headline)?, second.predict(headline)?);
    }
    Ok(())
}

#[test]
fn test_different_seed_still_valid() {
    let classifier = Classifier::builder()
        .with_random_seed(7)
        .build_from_reader(common::balanced_csv(150).as_bytes())
        .unwrap();
    assert_eq!(classifier.categories().len(), 5);
    assert_eq!(classifier.predict("Bank profit beats market earnings").unwrap(), "BUSINESS");
}

#[test]
fn test_balance_invariant() {
    let config = ClassifierConfig::default();
    let examples = common::balanced_examples(150);
    let mut rng = StdRng::seed_from_u64(config.random_seed);
    let (corpus, encoder) = prepare(
        &examples,
        &config.categories,
        config.per_category_count,
        &mut rng,
    )
    .unwrap();

    assert_eq!(corpus.len(), 500);
    for category in DEFAULT_CATEGORIES {
        let label = encoder.encode(category).unwrap();
        assert_eq!(corpus.label_counts()[&label], 100);
        assert_eq!(encoder.decode(label), Some(category));
    }
}

#[test]
fn test_prediction_domain() {
    let classifier = setup_test_classifier();
    let inputs = [
        "",
        "   ",
        "!!!???",
        "2024 12 31",
        "http://only.a.link/here",
        "qwerty asdf zxcv",
        "Ünïcödé ħéàdlïñé",
        "a",
        "after new big today",
    ];
    for input in inputs {
        let category = classifier.predict(input).unwrap();
        assert!(
            DEFAULT_CATEGORIES.contains(&category.as_str()),
            "{:?} predicted out-of-domain {:?}",
            input,
            category
        );
    }
}

#[test]
fn test_prediction_scores() -> Result<(), Box<dyn std::error::Error>> {
    let classifier = setup_test_classifier();
    let (category, scores) = classifier.predict_with_scores("Stocks rally after interest rate cut")?;
    assert_eq!(category, "BUSINESS");
    assert_eq!(scores.len(), 5);
    let best = scores
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .map(|(label, _)| label.clone())
        .unwrap();
    assert_eq!(best, category);
    Ok(())
}

#[test]
fn test_thread_safety() {
    let classifier = Arc::new(setup_test_classifier());
    let mut handles = vec![];

    for headline in ["Team wins title", "Chip maker update", "Senate debate"] {
        let classifier = Arc::clone(&classifier);
        let handle = thread::spawn(move || {
            let result = classifier.predict(headline);
            assert!(result.is_ok());
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_build_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("news_sample.csv");
    std::fs::write(&path, common::balanced_csv(120))?;

    let classifier = Classifier::builder().build_from_path(&path)?;
    assert_eq!(classifier.predict("Lawmakers debate the governor policy")?, "POLITICS");
    Ok(())
}
