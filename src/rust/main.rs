use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use headline_classifier::{dataset, Classifier, ClassifierConfig};
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Classify news headlines by category", long_about = None)]
struct Args {
    /// CSV file with `headline` and `category` columns
    /// [default: $HEADLINE_DATASET, else news_sample.csv]
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Categories to train on (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    categories: Option<Vec<String>>,

    /// Headlines sampled per category
    #[arg(long, default_value_t = 100)]
    per_category: usize,

    /// Fraction of the balanced data held out from training
    #[arg(long, default_value_t = 0.2)]
    test_fraction: f64,

    /// Maximum vocabulary size
    #[arg(long, default_value_t = 10_000)]
    max_features: usize,

    /// Seed for sampling and splitting
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Headline to classify; repeat for several. Without it an interactive
    /// prompt reads headlines from stdin.
    #[arg(short = 'H', long = "headline")]
    headlines: Vec<String>,

    /// Print per-category probabilities
    #[arg(short, long)]
    scores: bool,

    /// Print the holdout accuracy after training
    #[arg(short, long)]
    evaluate: bool,
}

impl Args {
    fn config(&self) -> ClassifierConfig {
        let defaults = ClassifierConfig::default();
        ClassifierConfig {
            categories: self.categories.clone().unwrap_or(defaults.categories),
            per_category_count: self.per_category,
            test_fraction: self.test_fraction,
            max_features: self.max_features,
            random_seed: self.seed,
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    headline_classifier::init_logger();
    let args = Args::parse();

    info!("=== Starting News Category Classifier ===");
    let path = dataset::resolve_dataset_path(args.data.as_deref());
    let start_time = Instant::now();

    let classifier = Classifier::builder()
        .with_config(args.config())
        .build_from_path(&path)
        .with_context(|| format!("Failed to train classifier from {}", path.display()))?;

    info!("=== Classifier Built Successfully (took {:.2?}) ===", start_time.elapsed());

    print_categories(&classifier);
    if args.evaluate {
        print_evaluation(&classifier);
    }

    if args.headlines.is_empty() {
        run_prompt(&classifier, args.scores)?;
    } else {
        let mut stdout = io::stdout();
        for headline in &args.headlines {
            process_input(&classifier, headline, args.scores, &mut stdout)?;
        }
    }

    Ok(())
}

fn print_categories(classifier: &Classifier) {
    println!("Categories used in this model:");
    for category in classifier.categories() {
        println!("  - {}", category);
    }
}

fn print_evaluation(classifier: &Classifier) {
    let info = classifier.info();
    match info.holdout_accuracy {
        Some(accuracy) => println!(
            "Holdout accuracy: {:.1}% ({} rows held out, {} used for training)",
            accuracy * 100.0,
            info.holdout_size,
            info.train_size
        ),
        None => println!("No holdout rows (test fraction is 0)"),
    }
}

fn run_prompt(classifier: &Classifier, show_scores: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("\nEnter a news headline (empty line to skip, Ctrl-D to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        process_input(classifier, line.trim_end_matches(['\r', '\n']), show_scores, &mut stdout)?;
    }
}

fn process_input(
    classifier: &Classifier,
    headline: &str,
    show_scores: bool,
    out: &mut impl Write,
) -> Result<()> {
    if headline.trim().is_empty() {
        writeln!(out, "Please enter a headline.")?;
        return Ok(());
    }
    info!("Processing: {}", headline);

    if show_scores {
        let (category, scores) = classifier.predict_with_scores(headline)?;
        let mut scores: Vec<_> = scores.into_iter().collect();
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        writeln!(out, "Predicted category: {}", category)?;
        writeln!(out, "  Scores (sorted):")?;
        for (label, score) in scores {
            writeln!(out, "    {}: {:.1}%", label, score * 100.0)?;
        }
    } else {
        writeln!(out, "Predicted category: {}", classifier.predict(headline)?)?;
    }
    Ok(())
}
