use crate::analysis::models::{CategoryMatches, SkillsFound};

/// Known technical skills grouped by category. Keywords are lowercase and
/// matched as raw substrings of the lowercased resume text, so short entries
/// such as "r" or "go" also hit inside unrelated words.
pub const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python",
            "java",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "php",
            "ruby",
            "go",
            "rust",
            "swift",
            "kotlin",
            "scala",
            "r",
            "matlab",
            "sql",
            "html",
            "css",
            "bash",
            "powershell",
        ],
    ),
    (
        "frameworks",
        &[
            "react",
            "angular",
            "vue",
            "django",
            "flask",
            "express",
            "spring",
            "laravel",
            "rails",
            "asp.net",
            "bootstrap",
            "tailwind",
            "jquery",
            "node.js",
            "next.js",
        ],
    ),
    (
        "databases",
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "elasticsearch",
            "sqlite",
            "oracle",
            "cassandra",
            "dynamodb",
            "firebase",
        ],
    ),
    (
        "cloud_tools",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "jenkins",
            "git",
            "github",
            "gitlab",
            "terraform",
            "ansible",
            "nginx",
            "apache",
        ],
    ),
    (
        "data_science",
        &[
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "keras",
            "matplotlib",
            "seaborn",
            "tableau",
            "power bi",
            "jupyter",
            "spark",
        ],
    ),
];

/// Matches every catalog keyword against `text_lower`. Each keyword counts at
/// most once no matter how often it occurs.
pub fn extract_skills(text_lower: &str) -> SkillsFound {
    let mut total_count = 0;

    let categories = SKILL_CATALOG
        .iter()
        .map(|&(category, keywords)| {
            let skills: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|kw| text_lower.contains(kw))
                .collect();
            total_count += skills.len();
            CategoryMatches { category, skills }
        })
        .collect();

    SkillsFound {
        categories,
        total_count,
    }
}
