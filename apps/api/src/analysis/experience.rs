use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::models::ExperienceSignal;

/// Achievement-oriented verbs.
pub const ACTION_WORDS: &[&str] = &[
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "optimized",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "delivered",
    "coordinated",
    "supervised",
    "analyzed",
    "collaborated",
    "established",
];

const NUMBERS_PREVIEW_LIMIT: usize = 10;

/// Integers or decimals with an optional trailing percent sign.
static QUANTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?%?").expect("valid regex"));

/// Scans `text_lower` for action verbs (substring match) and numeric tokens.
/// `quantifiable_achievements` counts every match; only the first ten are
/// kept in `numbers_found`.
pub fn analyze_experience(text_lower: &str) -> ExperienceSignal {
    let action_words: Vec<&'static str> = ACTION_WORDS
        .iter()
        .copied()
        .filter(|w| text_lower.contains(w))
        .collect();

    let mut quantifiable_achievements = 0;
    let mut numbers_found = Vec::new();
    for m in QUANTIFIER_RE.find_iter(text_lower) {
        if numbers_found.len() < NUMBERS_PREVIEW_LIMIT {
            numbers_found.push(m.as_str().to_string());
        }
        quantifiable_achievements += 1;
    }

    ExperienceSignal {
        action_words_count: action_words.len(),
        action_words,
        quantifiable_achievements,
        numbers_found,
    }
}
