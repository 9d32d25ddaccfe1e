//! Flesch Reading Ease.
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`,
//! rounded to two decimals. Segmentation follows the usual textstat rules:
//! sentences are `\b[^.!?]+[.!?]*` segments, segments of two words or fewer
//! are not counted, and there is always at least one sentence.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("valid regex"));

/// Score returned when the text has no words.
pub const EMPTY_TEXT_SCORE: f64 = 0.0;

/// Scores original-case text. Not clamped; very simple text can exceed 100
/// and dense text can go negative.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<String> = words(text).collect();
    if words.is_empty() {
        return EMPTY_TEXT_SCORE;
    }

    let word_count = words.len() as f64;
    let sentence_count = sentence_count(text) as f64;
    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();

    let avg_sentence_length = word_count / sentence_count;
    let avg_syllables_per_word = syllables as f64 / word_count;
    let score = 206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;

    (score * 100.0).round() / 100.0
}

/// Whitespace tokens stripped of punctuation; tokens with nothing left are
/// not words.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
}

fn sentence_count(text: &str) -> usize {
    let mut counted = 0;
    let mut ignored = 0;
    for segment in SENTENCE_RE.find_iter(text) {
        counted += 1;
        if words(segment.as_str()).count() <= 2 {
            ignored += 1;
        }
    }
    (counted - ignored).max(1)
}

/// Vowel-group heuristic: each run of vowels is one syllable, a trailing
/// silent `e` is dropped (but not in `-le`), and every word has at least one.
fn syllable_count(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().all(|c| c.is_ascii_digit()) {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut groups = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if groups > 1 && n > 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) {
        let le_ending = chars[n - 2] == 'l' && n > 3 && !is_vowel(chars[n - 3]);
        if !le_ending {
            groups -= 1;
        }
    }

    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_uses_fallback() {
        assert_eq!(flesch_reading_ease(""), EMPTY_TEXT_SCORE);
        assert_eq!(flesch_reading_ease("   \n\t "), EMPTY_TEXT_SCORE);
        assert_eq!(flesch_reading_ease("... !!! ???"), EMPTY_TEXT_SCORE);
    }

    #[test]
    fn test_simple_sentence() {
        // 6 words, 1 sentence, 6 syllables:
        // 206.835 - 1.015 * 6 - 84.6 * 1 = 116.145
        let score = flesch_reading_ease("The cat sat on the mat.");
        assert!((score - 116.15).abs() < 0.011, "Score was {score}");
    }

    #[test]
    fn test_dense_text_scores_lower_than_plain_text() {
        let plain = flesch_reading_ease("I ran a team. We made the app fast. It was fun to build.");
        let dense = flesch_reading_ease(
            "Architected comprehensive organizational infrastructure modernization initiatives \
             facilitating interdepartmental communication optimization.",
        );
        assert!(plain > dense, "plain {plain} <= dense {dense}");
        assert!(dense < 30.0, "dense was {dense}");
    }

    #[test]
    fn test_result_rounded_to_two_decimals() {
        let score = flesch_reading_ease("Managed a distributed team of engineers across regions.");
        assert!(((score * 100.0).round() - score * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_segments_not_counted_as_sentences() {
        assert_eq!(sentence_count("Hi. This is a full sentence. Ok."), 1);
        assert_eq!(sentence_count("One two three. Four five six."), 2);
        assert_eq!(sentence_count("no terminal punctuation here"), 1);
    }

    #[test]
    fn test_words_strip_punctuation() {
        let w: Vec<String> = words("Hello, world! -- (rust)").collect();
        assert_eq!(w, vec!["Hello", "world", "rust"]);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllable_count("cat"), 1);
        assert_eq!(syllable_count("make"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("engineer"), 3);
        assert_eq!(syllable_count("rhythm"), 1);
        assert_eq!(syllable_count("2024"), 1);
        assert_eq!(syllable_count("the"), 1);
    }
}
