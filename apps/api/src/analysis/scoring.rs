use serde::{Deserialize, Serialize};

use crate::analysis::models::{ExperienceSignal, SkillsFound};

const SKILLS_CAP: u32 = 30;
const SECTIONS_MAX: u32 = 25;
const SECTION_PENALTY: u32 = 5;
const EXPERIENCE_CAP: u32 = 25;
const MAX_SCORE: u32 = 100;

/// The four capped components that add up to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub sections: u32,
    pub experience: u32,
    pub readability: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        (self.skills + self.sections + self.experience + self.readability).min(MAX_SCORE)
    }
}

/// Label for an overall score: >= 80 excellent, >= 60 good, otherwise needs work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreRating::Excellent,
            s if s >= 60 => ScoreRating::Good,
            _ => ScoreRating::NeedsWork,
        }
    }
}

/// Skills: 2 points per matched keyword, capped at 30.
/// Sections: 25 minus 5 per missing section, floored at 0.
/// Experience: 2 per action word plus 1 per numeric token, capped at 25.
/// Readability: 20 at >= 60, 15 at >= 30, otherwise 10.
pub fn score_breakdown(
    skills: &SkillsFound,
    missing_sections: &[&str],
    experience: &ExperienceSignal,
    readability: f64,
) -> ScoreBreakdown {
    let skills_score = saturating_u32(skills.total_count.saturating_mul(2)).min(SKILLS_CAP);

    let penalty = saturating_u32(missing_sections.len()).saturating_mul(SECTION_PENALTY);
    let sections_score = SECTIONS_MAX.saturating_sub(penalty);

    let experience_raw = experience
        .action_words_count
        .saturating_mul(2)
        .saturating_add(experience.quantifiable_achievements);
    let experience_score = saturating_u32(experience_raw).min(EXPERIENCE_CAP);

    ScoreBreakdown {
        skills: skills_score,
        sections: sections_score,
        experience: experience_score,
        readability: readability_bucket(readability),
    }
}

/// NaN falls through to the lowest bucket.
pub fn readability_bucket(readability: f64) -> u32 {
    if readability >= 60.0 {
        20
    } else if readability >= 30.0 {
        15
    } else {
        10
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
