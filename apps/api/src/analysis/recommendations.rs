use crate::analysis::models::{ExperienceSignal, SkillsFound};

const MIN_SKILLS: usize = 10;
const MIN_ACTION_WORDS: usize = 5;
const MIN_QUANTIFIED: usize = 3;

pub const ADD_SKILLS: &str = "Add more technical skills to improve your profile visibility.";
pub const USE_ACTION_WORDS: &str = "Use more action words to describe your achievements.";
pub const QUANTIFY_ACHIEVEMENTS: &str =
    "Include more quantifiable achievements with numbers and percentages.";

/// Every check runs; output order is skills, sections, action words, numbers.
pub fn build_recommendations(
    skills: &SkillsFound,
    missing_sections: &[&str],
    experience: &ExperienceSignal,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skills.total_count < MIN_SKILLS {
        recommendations.push(ADD_SKILLS.to_string());
    }

    if !missing_sections.is_empty() {
        recommendations.push(format!(
            "Consider adding these missing sections: {}",
            missing_sections.join(", ")
        ));
    }

    if experience.action_words_count < MIN_ACTION_WORDS {
        recommendations.push(USE_ACTION_WORDS.to_string());
    }

    if experience.quantifiable_achievements < MIN_QUANTIFIED {
        recommendations.push(QUANTIFY_ACHIEVEMENTS.to_string());
    }

    recommendations
}
