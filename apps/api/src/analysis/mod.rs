// Resume analysis engine: deterministic keyword rules over extracted text.
// `analyze` is the only entry point handlers use; everything below it is pure.

pub mod experience;
pub mod handlers;
pub mod models;
pub mod readability;
pub mod recommendations;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod word_frequency;

use tracing::debug;

use crate::analysis::experience::analyze_experience;
use crate::analysis::models::AnalysisResult;
use crate::analysis::readability::flesch_reading_ease;
use crate::analysis::recommendations::build_recommendations;
use crate::analysis::scoring::score_breakdown;
use crate::analysis::sections::find_missing_sections;
use crate::analysis::skills::extract_skills;
use crate::analysis::word_frequency::top_words;

/// Runs every sub-analysis over `raw_text` and aggregates the result.
///
/// Keyword matching, section detection, numeric scanning and word counts run
/// on the lowercased text; readability sees the original casing. Any input,
/// including the empty string, yields a complete result.
pub fn analyze(raw_text: &str) -> AnalysisResult {
    let text_lower = raw_text.to_lowercase();

    let skills = extract_skills(&text_lower);
    let missing_sections = find_missing_sections(&text_lower);
    let experience_analysis = analyze_experience(&text_lower);
    let readability_score = flesch_reading_ease(raw_text);
    let word_frequency = top_words(&text_lower);

    let breakdown = score_breakdown(
        &skills,
        &missing_sections,
        &experience_analysis,
        readability_score,
    );
    debug!(
        skills = breakdown.skills,
        sections = breakdown.sections,
        experience = breakdown.experience,
        readability = breakdown.readability,
        top_terms = word_frequency.0.len(),
        "Score breakdown"
    );

    let recommendations = build_recommendations(&skills, &missing_sections, &experience_analysis);

    AnalysisResult {
        skills,
        missing_sections,
        experience_analysis,
        readability_score,
        word_frequency,
        overall_score: breakdown.total(),
        recommendations,
    }
}
