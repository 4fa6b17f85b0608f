//! Term lists and patterns for the presence detectors.
//!
//! Word lists match at the start of a token, so "project" also catches
//! "projects" and "led" catches "led" but not "tabled". Keep each list free of
//! filler words ("to", "up") that would match almost any text.

pub const SECTION_HEADINGS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "work history",
    "professional experience",
    "employment",
];

/// Raw pattern: email-ish tokens and URL suffixes are not word-shaped.
pub const CONTACT_PATTERN: &str =
    r"email|e-mail|phone|mobile|linkedin|github|portfolio|@|\.com\b|\.net\b|\.org\b|\.io\b";

pub const SKILL_TERMS: &[&str] = &[
    "skills",
    "technologies",
    "tech skills",
    "competencies",
    "programming",
    "software",
    "tools",
    "javascript",
    "typescript",
    "python",
    "java",
    "rust",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "aws",
    "docker",
    "kubernetes",
    "agile",
    "scrum",
    "git",
    "api",
    "database",
    "framework",
    "library",
    "language",
    "technology",
    "stack",
];

const QUANTITY_UNITS: &[&str] = &[
    "percent",
    "people",
    "team",
    "project",
    "year",
    "month",
    "dollar",
    "users",
    "customers",
    "clients",
    "revenue",
    "growth",
    "improvement",
    "reduction",
    "increase",
    "decrease",
];

/// Numbers next to a unit word, percentages, and currency amounts.
pub fn quantified_pattern() -> String {
    format!(
        r"\d+(?:\.\d+)?\s*%|[$€£]\s?\d+|\d+[km]?\+?\s+(?:{})",
        QUANTITY_UNITS.join("|")
    )
}

pub const ACTION_VERBS: &[&str] = &[
    "accelerated",
    "accomplished",
    "achieved",
    "advanced",
    "aided",
    "amplified",
    "analyzed",
    "announced",
    "architected",
    "arranged",
    "assembled",
    "assessed",
    "assisted",
    "automated",
    "boosted",
    "built",
    "clarified",
    "coordinated",
    "communicated",
    "completed",
    "constructed",
    "contributed",
    "created",
    "cultivated",
    "decreased",
    "delivered",
    "demonstrated",
    "deployed",
    "designed",
    "developed",
    "directed",
    "doubled",
    "drove",
    "empowered",
    "enabled",
    "encouraged",
    "engineered",
    "enhanced",
    "established",
    "evaluated",
    "executed",
    "expanded",
    "expedited",
    "facilitated",
    "formalized",
    "fostered",
    "founded",
    "generated",
    "grew",
    "guided",
    "helped",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "introduced",
    "launched",
    "led",
    "maintained",
    "managed",
    "mentored",
    "migrated",
    "multiplied",
    "navigated",
    "nurtured",
    "optimized",
    "orchestrated",
    "organized",
    "pioneered",
    "piloted",
    "planned",
    "presented",
    "produced",
    "promoted",
    "propelled",
    "reduced",
    "refined",
    "researched",
    "resolved",
    "scaled",
    "shipped",
    "showcased",
    "simplified",
    "spearheaded",
    "standardized",
    "steered",
    "streamlined",
    "structured",
    "supported",
    "systematized",
    "tripled",
    "troubleshot",
    "unveiled",
    "upgraded",
];

pub const EXPERIENCE_TERMS: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "professional experience",
    "job",
    "position",
    "role",
    "career",
    "occupation",
    "work",
    "title",
    "responsibilities",
    "duties",
    "tasks",
    "projects",
    "initiatives",
    "achievements",
    "accomplishments",
    "contributions",
    "deliverables",
    "company",
    "organization",
    "employer",
    "client",
    "stakeholder",
    "team",
    "department",
    "division",
    "internship",
    "intern",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "education",
    "bachelor",
    "master",
    "phd",
    "ph.d",
    "mba",
    "university",
    "degree",
    "college",
    "school",
    "academic",
    "academy",
    "institute",
    "institution",
    "faculty",
    "curriculum",
    "coursework",
    "course",
    "syllabus",
    "lecture",
    "seminar",
    "certification",
    "certificate",
    "diploma",
    "transcript",
    "gpa",
    "graduated",
];
