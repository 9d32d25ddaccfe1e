use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::WordFrequency;

pub const TOP_WORDS_LIMIT: usize = 20;

/// Standard English stop-word list (NLTK corpus).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

static TOKEN_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s,;:()\[\]{}<>"!?]+"#).expect("valid regex"));

/// Contractions split from the preceding word ("company's" -> "company").
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Counts content words in `text_lower` and keeps the 20 most frequent.
/// Equal counts keep the order in which the words first appeared.
pub fn top_words(text_lower: &str) -> WordFrequency {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in tokenize(text_lower).filter(|w| is_content_word(w)) {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|w| (w.to_string(), counts[w]))
        .collect();
    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_WORDS_LIMIT);

    WordFrequency(ranked)
}

/// Treebank-style word splitting on whitespace and clause punctuation, with
/// trailing clitics split off. Dots and hyphens inside a token keep it joined
/// ("node.js").
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_BOUNDARY_RE
        .split(text)
        .map(|t| strip_clitic(t.trim_matches(|c: char| !c.is_alphanumeric())))
        .filter(|t| !t.is_empty())
}

fn strip_clitic(token: &str) -> &str {
    CLITICS
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}

fn is_content_word(word: &str) -> bool {
    word.chars().all(char::is_alphabetic)
        && word.chars().count() > 2
        && !STOP_WORDS.contains(word)
}
