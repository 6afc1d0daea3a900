//! Text normalization feeding the similarity scorer.

/// Standard English stop words excluded from the TF-IDF vocabulary.
/// Tokens of length <= 3 are already dropped by `normalize`, so only the
/// longer entries ever match, but the full list is kept for clarity.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "among", "an", "and",
    "another", "any", "are", "aren", "as", "at", "back", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "came", "can", "cannot", "come", "could",
    "did", "do", "does", "doing", "down", "during", "each", "even", "every", "few", "first",
    "for", "from", "further", "get", "good", "great", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
    "in", "into", "is", "it", "its", "itself", "just", "know", "like", "made", "make", "many",
    "me", "might", "more", "most", "much", "must", "my", "myself", "never", "no", "nor", "not",
    "now", "of", "off", "on", "once", "only", "or", "other", "others", "our", "ours",
    "ourselves", "out", "over", "own", "said", "same", "see", "shall", "she", "should", "since",
    "so", "some", "still", "such", "take", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "time", "to",
    "too", "under", "until", "up", "upon", "us", "very", "was", "way", "we", "well", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Normalizes free text for scoring: lowercase, every character outside
/// `[a-z0-9]` and whitespace replaced with a space, tokens of length <= 3
/// dropped, remainder rejoined with single spaces.
/// Empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized tokens with stop words removed — the scorer's vocabulary input.
pub fn content_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
