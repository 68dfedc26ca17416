//! Semantic closeness of two free-text strings.
//!
//! A pairwise TF-IDF weighting over the joint vocabulary of the two texts,
//! reduced with cosine similarity. Terms appearing in both texts carry the
//! minimum idf and distinguishing terms carry more weight, so shared
//! phrasing dominates the score. No corpus state is kept; the score for a
//! pair of strings is fully determined by that pair.

use std::collections::{BTreeSet, HashMap};

/// Similarity between two texts in [0, 1].
///
/// Empty or whitespace-only input on either side scores 0. If neither text
/// contributes a scorable term (all tokens shorter than two characters),
/// falls back to exact string equality.
pub fn similarity(text1: &str, text2: &str) -> f64 {
    if text1.trim().is_empty() || text2.trim().is_empty() {
        return 0.0;
    }

    let terms1 = term_counts(text1);
    let terms2 = term_counts(text2);
    let vocabulary: BTreeSet<&str> = terms1.keys().chain(terms2.keys()).map(String::as_str).collect();
    if vocabulary.is_empty() {
        return if text1 == text2 { 1.0 } else { 0.0 };
    }

    let mut v1 = Vec::with_capacity(vocabulary.len());
    let mut v2 = Vec::with_capacity(vocabulary.len());
    for term in &vocabulary {
        let tf1 = terms1.get(*term).copied().unwrap_or(0) as f64;
        let tf2 = terms2.get(*term).copied().unwrap_or(0) as f64;
        let idf = smooth_idf(tf1 > 0.0, tf2 > 0.0);
        v1.push(tf1 * idf);
        v2.push(tf2 * idf);
    }

    let sq1 = squared_norm(&v1);
    let sq2 = squared_norm(&v2);
    if sq1 == 0.0 || sq2 == 0.0 {
        return 0.0;
    }
    let dot: f64 = v1.iter().zip(&v2).map(|(a, b)| a * b).sum();
    // sqrt of the product (rather than a product of sqrts) keeps the score
    // at exactly 1.0 for identical vectors.
    (dot / (sq1 * sq2).sqrt()).clamp(0.0, 1.0)
}

/// Smoothed inverse document frequency over the two-document "corpus":
/// `ln((1 + n) / (1 + df)) + 1` with n = 2.
fn smooth_idf(in_first: bool, in_second: bool) -> f64 {
    let df = usize::from(in_first) + usize::from(in_second);
    ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0
}

/// Raw term counts. Tokens are lowercased alphanumeric runs of at least two
/// characters; single characters carry no signal and are dropped.
fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
    {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

fn squared_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}
