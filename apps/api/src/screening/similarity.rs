//! Lexical similarity between a job description and a resume.
//!
//! TF-IDF over a corpus of exactly two documents, cosine similarity between
//! the two weight vectors, scaled to a 0-100 score. Pure and deterministic;
//! an empty or vocabulary-disjoint pair scores 0 rather than erroring.

use std::collections::HashMap;

use crate::screening::text::content_tokens;

/// Smoothed IDF over the two-document corpus: ln((1 + n) / (1 + df)) + 1.
fn idf(doc_frequency: usize) -> f64 {
    ((1.0 + 2.0) / (1.0 + doc_frequency as f64)).ln() + 1.0
}

/// Scores how closely a resume matches a job description, in [0, 100],
/// rounded to two decimal places. Symmetric in its arguments.
pub fn similarity_score(jd_text: &str, resume_text: &str) -> f64 {
    let jd_tokens = content_tokens(jd_text);
    let resume_tokens = content_tokens(resume_text);

    if jd_tokens.is_empty() || resume_tokens.is_empty() {
        return 0.0;
    }

    let jd_tf = term_frequencies(&jd_tokens);
    let resume_tf = term_frequencies(&resume_tokens);

    // Vocabulary is the union of both documents' terms, sorted so the
    // floating-point accumulation order is deterministic.
    let mut vocabulary: Vec<&str> = jd_tf.keys().chain(resume_tf.keys()).copied().collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let mut dot = 0.0;
    let mut jd_norm_sq = 0.0;
    let mut resume_norm_sq = 0.0;

    for term in vocabulary {
        let jd_count = jd_tf.get(term).copied().unwrap_or(0);
        let resume_count = resume_tf.get(term).copied().unwrap_or(0);
        let doc_frequency = usize::from(jd_count > 0) + usize::from(resume_count > 0);
        let weight = idf(doc_frequency);

        let a = jd_count as f64 * weight;
        let b = resume_count as f64 * weight;
        dot += a * b;
        jd_norm_sq += a * a;
        resume_norm_sq += b * b;
    }

    if jd_norm_sq == 0.0 || resume_norm_sq == 0.0 {
        return 0.0;
    }

    let cosine = dot / (jd_norm_sq.sqrt() * resume_norm_sq.sqrt());
    round2(cosine * 100.0)
}

fn term_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut tf = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }
    tf
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
