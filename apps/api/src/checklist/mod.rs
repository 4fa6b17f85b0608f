//! Signal Checklist Evaluator — advisory ATS presence checks over resume text.
//!
//! Detectors are high-recall lexical triggers: false positives are fine, the
//! checklist hints at ATS compatibility and never scores anything. Output order
//! is the declaration order of `Detector::ALL`; consumers bind by position.

pub mod detectors;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The fixed set of presence detectors, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detector {
    SectionHeadings,
    ContactInformation,
    KeywordsAndSkills,
    QuantifiedAchievements,
    ActionVerbs,
    ProfessionalExperience,
    EducationSection,
}

impl Detector {
    pub const ALL: [Detector; 7] = [
        Detector::SectionHeadings,
        Detector::ContactInformation,
        Detector::KeywordsAndSkills,
        Detector::QuantifiedAchievements,
        Detector::ActionVerbs,
        Detector::ProfessionalExperience,
        Detector::EducationSection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Detector::SectionHeadings => "Standard Section Headings",
            Detector::ContactInformation => "Contact Information",
            Detector::KeywordsAndSkills => "Keywords & Skills",
            Detector::QuantifiedAchievements => "Quantified Achievements",
            Detector::ActionVerbs => "Action Verbs",
            Detector::ProfessionalExperience => "Professional Experience",
            Detector::EducationSection => "Education Section",
        }
    }

    fn pattern(self) -> &'static Regex {
        &COMPILED[self as usize]
    }
}

/// One named presence signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub present: bool,
}

/// Compiled once, indexed by `Detector as usize`.
static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    Detector::ALL
        .iter()
        .map(|detector| {
            let source = match detector {
                Detector::SectionHeadings => term_pattern(detectors::SECTION_HEADINGS),
                Detector::ContactInformation => detectors::CONTACT_PATTERN.to_string(),
                Detector::KeywordsAndSkills => term_pattern(detectors::SKILL_TERMS),
                Detector::QuantifiedAchievements => detectors::quantified_pattern(),
                Detector::ActionVerbs => term_pattern(detectors::ACTION_VERBS),
                Detector::ProfessionalExperience => term_pattern(detectors::EXPERIENCE_TERMS),
                Detector::EducationSection => term_pattern(detectors::EDUCATION_TERMS),
            };
            Regex::new(&source).expect("static detector pattern must compile")
        })
        .collect()
});

/// Builds `\b(?:a|b|c)` from a term list, deduplicated and escaped.
fn term_pattern(terms: &[&str]) -> String {
    let mut unique: Vec<&str> = terms.to_vec();
    unique.sort_unstable();
    unique.dedup();
    // Longest first so alternation prefers "work history" over "work".
    unique.sort_by_key(|t| std::cmp::Reverse(t.len()));

    let alternation = unique
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\b(?:{alternation})")
}

/// Runs every detector over the text. Total and pure: any input, including the
/// empty string, yields exactly one item per detector in declaration order.
pub fn evaluate(text: &str) -> Vec<ChecklistItem> {
    let haystack = text.to_lowercase();
    Detector::ALL
        .iter()
        .map(|&detector| ChecklistItem {
            label: detector.label().to_string(),
            present: detector.pattern().is_match(&haystack),
        })
        .collect()
}

/// Forces pattern compilation; called at startup so the first run pays nothing.
pub fn warm_up() {
    Lazy::force(&COMPILED);
}
