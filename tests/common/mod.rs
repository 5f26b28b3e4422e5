#![allow(dead_code)]

use headline_classifier::RawExample;

/// Words that only ever appear in headlines of one category.
pub static VOCABULARY: [(&str, [&str; 12]); 5] = [
    ("BUSINESS", ["stocks", "rally", "interest", "rate", "cut", "market", "earnings", "shares", "bank", "investors", "profit", "economy"]),
    ("POLITICS", ["senate", "election", "vote", "president", "campaign", "congress", "bill", "governor", "policy", "lawmakers", "debate", "ballot"]),
    ("SPORTS", ["team", "wins", "championship", "coach", "season", "league", "player", "game", "score", "playoffs", "tournament", "title"]),
    ("TECH", ["software", "startup", "smartphone", "app", "robot", "chip", "internet", "data", "cloud", "hackers", "gadget", "update"]),
    ("ENTERTAINMENT", ["movie", "star", "album", "actor", "singer", "film", "show", "premiere", "celebrity", "concert", "festival", "award"]),
];

/// Words shared by every category.
const SHARED: [&str; 4] = ["after", "new", "big", "today"];

fn vocabulary(category: &str) -> &'static [&'static str; 12] {
    VOCABULARY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, words)| words)
        .expect("unknown fixture category")
}

/// The `i`-th synthetic headline of `category`, with the capitals, digits
/// and punctuation a raw headline would carry.
pub fn headline(category: &str, i: usize) -> String {
    let words = vocabulary(category);
    let first = words[i % 12];
    let mut chars = first.chars();
    let capitalized: String = chars.next().map(|c| c.to_ascii_uppercase()).into_iter().chain(chars).collect();
    format!(
        "{} {} {} {}: {} ({})!",
        capitalized,
        words[(i / 12 + 5 * i + 1) % 12],
        SHARED[i % SHARED.len()],
        words[(7 * i + 3) % 12],
        words[(i / 3 + 2) % 12],
        i
    )
}

/// Rows for every `(category, count)` pair.
pub fn examples(counts: &[(&str, usize)]) -> Vec<RawExample> {
    counts
        .iter()
        .flat_map(|&(category, n)| (0..n).map(move |i| RawExample::new(headline(category, i), category)))
        .collect()
}

/// `n` rows for each of the five default categories.
pub fn balanced_examples(n: usize) -> Vec<RawExample> {
    let counts: Vec<(&str, usize)> = VOCABULARY.iter().map(|(category, _)| (*category, n)).collect();
    examples(&counts)
}

/// CSV text with an extra `link` column in front of the required ones.
pub fn dataset_csv(counts: &[(&str, usize)]) -> String {
    let mut csv = String::from("link,headline,category\n");
    for (i, example) in examples(counts).iter().enumerate() {
        csv.push_str(&format!(
            "https://news.example.com/{},{},{}\n",
            i,
            example.headline.as_deref().unwrap_or_default(),
            example.category.as_deref().unwrap_or_default()
        ));
    }
    csv
}

pub fn balanced_csv(n: usize) -> String {
    let counts: Vec<(&str, usize)> = VOCABULARY.iter().map(|(category, _)| (*category, n)).collect();
    dataset_csv(&counts)
}
