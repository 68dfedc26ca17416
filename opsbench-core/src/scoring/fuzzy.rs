//! Token-set fuzzy string ratio.
//!
//! Word-order insensitive and subset-aware: two labels that share the same
//! words in a different order score 100, and a label whose words are a
//! subset of the other's also scores 100. The base character ratio is the
//! difflib-style `2M/T` measure provided by the `similar` crate.

use similar::TextDiff;
use std::collections::BTreeSet;

/// Fuzzy similarity between two strings on a 0–100 scale.
///
/// Both inputs are normalized to lowercase alphanumeric word sets. From the
/// sorted intersection `s` and the sorted one-sided differences we build
/// `s`, `s + rest_of_a`, and `s + rest_of_b`, and return the best pairwise
/// character ratio among the three. Strings with no scorable words yield 0.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = word_set(a);
    let tokens_b = word_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).map(String::as_str).collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let sect = common.join(" ");
    let combined_a = join_parts(&sect, &only_a);
    let combined_b = join_parts(&sect, &only_b);

    let best = char_ratio(&sect, &combined_a)
        .max(char_ratio(&sect, &combined_b))
        .max(char_ratio(&combined_a, &combined_b));
    (100.0 * best).clamp(0.0, 100.0)
}

/// Lowercased alphanumeric words, deduplicated and sorted.
fn word_set(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_parts(sect: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        return sect.to_string();
    }
    if sect.is_empty() {
        return rest.join(" ");
    }
    format!("{sect} {}", rest.join(" "))
}

fn char_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    TextDiff::from_chars(a, b).ratio() as f64
}
