/// Canonical resume sections and the phrases that count as evidence of each.
/// Order here is the order missing sections are reported in.
pub const SECTION_PATTERNS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "profile", "about"]),
    ("objective", &["objective", "career objective"]),
    (
        "experience",
        &[
            "experience",
            "work experience",
            "employment",
            "professional experience",
        ],
    ),
    (
        "education",
        &["education", "academic", "degree", "university", "college"],
    ),
    ("skills", &["skills", "technical skills", "competencies"]),
    ("projects", &["projects", "portfolio", "work samples"]),
];

/// Returns the canonical sections none of whose patterns occur in `text_lower`.
pub fn find_missing_sections(text_lower: &str) -> Vec<&'static str> {
    SECTION_PATTERNS
        .iter()
        .filter(|(_, patterns)| !patterns.iter().any(|p| text_lower.contains(p)))
        .map(|(section, _)| *section)
        .collect()
}
