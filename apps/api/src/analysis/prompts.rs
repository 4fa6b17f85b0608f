// Prompt templates for resume analysis.
// `{{DOCUMENT_TEXT}}` and `{{JOB_DESCRIPTION}}` are substituted per run.

pub const ANALYSIS_SYSTEM: &str = "You are an expert resume reviewer and ATS specialist. \
    You score resumes against a specific job description and give concrete, honest feedback.";

pub const DOCUMENT_PLACEHOLDER: &str = "{{DOCUMENT_TEXT}}";
pub const JOB_DESCRIPTION_PLACEHOLDER: &str = "{{JOB_DESCRIPTION}}";

/// Substituted when the caller supplies a blank job description.
pub const MISSING_JOB_DESCRIPTION: &str = "Not provided";

pub const ANALYZE_RESUME_PROMPT: &str = r#"You are analyzing a document against a job description.

Step 1: decide whether the document is a resume. A resume has some of: work history or
professional experience, education, skills or qualifications, contact details.

If it is NOT a resume, reply with exactly:
{
  "error": "This document does not appear to be a resume. Please upload a resume with experience, education, and skills sections."
}

Step 2: if it IS a resume, compare it with the job description and reply with:
{
  "overallScore": "X/10",
  "strengths": ["...", "...", "..."],
  "improvements": ["...", "...", "..."],
  "keywords": ["...", "...", "..."],
  "summary": "Overall fit (good/moderate/poor), key strengths, critical missing skills",
  "performanceMetrics": {
    "formatting": X,
    "contentQuality": X,
    "keywordUsage": X,
    "atsCompatibility": X,
    "quantifiableAchievements": X
  },
  "actionItems": ["...", "...", "..."],
  "proTips": ["...", "...", "..."]
}

Rate every performanceMetrics entry as an integer from 1 to 10:
- formatting: clear sections, consistent layout, easy to scan.
- contentQuality: how well responsibilities and achievements match the job.
- keywordUsage: share of the job's technologies, tools and methods that appear in the resume.
- atsCompatibility: standard headings (Experience, Education, Skills, Summary), no tables or
  graphics, action verbs leading bullets, visible contact details.
- quantifiableAchievements: percentages, amounts, team sizes, measured results.

actionItems must be specific edits for THIS job, e.g. "Add X to the skills section (listed in the posting)".
proTips should cover positioning, terminology, and what hiring managers for this role look for.

RESUME TEXT:
{{DOCUMENT_TEXT}}

JOB DESCRIPTION/REQUIREMENTS:
{{JOB_DESCRIPTION}}"#;

/// Fills both placeholders. The job description is inserted last so resume
/// text that happens to contain the placeholder string is left alone.
pub fn build_analysis_prompt(document_text: &str, job_description: &str) -> String {
    let job_description = if job_description.trim().is_empty() {
        MISSING_JOB_DESCRIPTION
    } else {
        job_description.trim()
    };

    let (head, tail) = ANALYZE_RESUME_PROMPT
        .split_once(DOCUMENT_PLACEHOLDER)
        .unwrap_or((ANALYZE_RESUME_PROMPT, ""));
    let tail = tail.replacen(JOB_DESCRIPTION_PLACEHOLDER, job_description, 1);
    format!("{head}{document_text}{tail}")
}
