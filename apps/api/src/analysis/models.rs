use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Skills matched in one catalog category, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatches {
    pub category: &'static str,
    pub skills: Vec<&'static str>,
}

/// Per-category skill matches plus the total across all categories.
///
/// Serializes as a flat object: one key per category (always present, possibly
/// an empty array) followed by `total_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsFound {
    pub categories: Vec<CategoryMatches>,
    pub total_count: usize,
}

#[cfg(test)]
impl SkillsFound {
    pub fn category(&self, name: &str) -> Option<&[&'static str]> {
        self.categories
            .iter()
            .find(|c| c.category == name)
            .map(|c| c.skills.as_slice())
    }
}

impl Serialize for SkillsFound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len() + 1))?;
        for matches in &self.categories {
            map.serialize_entry(matches.category, &matches.skills)?;
        }
        map.serialize_entry("total_count", &self.total_count)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceSignal {
    pub action_words: Vec<&'static str>,
    pub action_words_count: usize,
    pub quantifiable_achievements: usize,
    /// First 10 numeric tokens in document order.
    pub numbers_found: Vec<String>,
}

/// Top terms by descending count; ties keep first-seen order.
/// Serializes as a JSON object whose key order is the ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequency(pub Vec<(String, usize)>);

#[cfg(test)]
impl WordFrequency {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }
}

impl Serialize for WordFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

/// Full output of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub skills: SkillsFound,
    pub missing_sections: Vec<&'static str>,
    pub experience_analysis: ExperienceSignal,
    pub readability_score: f64,
    pub word_frequency: WordFrequency,
    pub overall_score: u32,
    pub recommendations: Vec<String>,
}
