//! Headline normalization.
//!
//! Every headline goes through [`clean_text`] before it reaches the
//! vectorizer, both at training time and at prediction time, so the two
//! always see the same canonical form: lowercase ASCII letters separated by
//! single spaces.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"[a-z][a-z0-9+.\-]*://\S*").unwrap();
    static ref NON_ALPHA_RE: Regex = Regex::new(r"[^a-zA-Z ]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalizes an optional headline. A missing value becomes the empty string.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(text) => clean_text(text),
        None => String::new(),
    }
}

/// Lowercases the text, strips URLs and everything that is not an ASCII
/// letter or a space, then collapses runs of spaces.
///
/// ```
/// use headline_classifier::clean_text;
///
/// assert_eq!(clean_text("Visit http://x.com NOW!! 2024"), "visit now");
/// ```
pub fn clean_text(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = NON_ALPHA_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}
