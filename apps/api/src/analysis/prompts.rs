// Prompt constants for the resume screening pipeline.

/// Hard cap on resume characters embedded in the screening prompt.
pub const RESUME_CHAR_LIMIT: usize = 6000;

/// Hard cap on job description characters embedded in the screening prompt.
pub const JOB_DESCRIPTION_CHAR_LIMIT: usize = 2000;

/// Screening prompt template. Replace `{resume_text}` and `{job_description}`
/// before sending.
pub const SCREENING_PROMPT_TEMPLATE: &str = r#"You are an expert in HR resume screening.

Compare this resume and job description.
Return a JSON with:
- score (0-100)
- strengths (list of 3)
- weaknesses (list of 3)
- missing_keywords (list)
- improvement_tips (list)

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// Builds the screening prompt from extracted resume text and a raw job
/// description. Input past each character limit is dropped; the cut is a
/// hard slice, not word aware.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    SCREENING_PROMPT_TEMPLATE
        .replace(
            "{resume_text}",
            truncate_chars(resume_text, RESUME_CHAR_LIMIT),
        )
        .replace(
            "{job_description}",
            truncate_chars(job_description, JOB_DESCRIPTION_CHAR_LIMIT),
        )
}

/// Returns the first `max_chars` characters of `s`. Counts characters, not
/// bytes, so multi-byte text never splits mid-character.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_and_requested_keys() {
        let prompt = build_prompt("RESUME BODY", "JD BODY");

        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));

        for key in [
            "score",
            "strengths",
            "weaknesses",
            "missing_keywords",
            "improvement_tips",
        ] {
            assert!(prompt.contains(key), "prompt should ask for '{key}'");
        }
    }

    #[test]
    fn test_empty_inputs_still_build_a_prompt() {
        let prompt = build_prompt("", "");

        assert!(prompt.contains("RESUME:"));
        assert!(prompt.contains("JOB DESCRIPTION:"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_short_inputs_are_embedded_whole() {
        let prompt = build_prompt("short resume", "short jd");
        assert!(prompt.contains("short resume"));
        assert!(prompt.contains("short jd"));
    }

    #[test]
    fn test_resume_is_cut_at_its_limit() {
        let resume: String = ('a'..='z').cycle().take(10_000).collect();
        let prompt = build_prompt(&resume, "jd");

        assert!(prompt.contains(&resume[..6000]));
        assert!(!prompt.contains(&resume[..6001]));
    }

    #[test]
    fn test_job_description_is_cut_at_its_limit() {
        let jd: String = ('0'..='9').cycle().take(3_000).collect();
        let prompt = build_prompt("resume", &jd);

        assert!(prompt.contains(&jd[..2000]));
        assert!(!prompt.contains(&jd[..2001]));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 7000 two-byte characters; a byte-based cut would land mid-character
        // or keep only half as many.
        let resume = "é".repeat(7_000);
        let prompt = build_prompt(&resume, "jd");

        assert!(prompt.contains(&"é".repeat(6_000)));
        assert!(!prompt.contains(&"é".repeat(6_001)));
    }
}
