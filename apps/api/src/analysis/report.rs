//! Best-effort extraction of the structured screening report from a
//! free-text model reply.
//!
//! Models asked for JSON still wrap it in prose or code fences often enough
//! that a strict parse alone is not viable. The extractor tries a strict
//! parse first, then the widest brace-delimited slice of the reply. A reply
//! that yields no valid report is replaced by a fixed fallback object, so
//! callers always receive the full report shape.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

/// Top-level keys every screening report must carry.
pub const REQUIRED_KEYS: [&str; 5] = [
    "score",
    "strengths",
    "weaknesses",
    "missing_keywords",
    "improvement_tips",
];

/// Marker attached to the fallback report so callers can tell it apart from
/// a real analysis.
pub const FALLBACK_NOTE: &str = "Fallback response used due to parsing error.";

#[derive(Debug, Error)]
enum ExtractFailure {
    #[error("no JSON object found in reply")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reply JSON is missing required key '{0}'")]
    MissingKey(&'static str),
}

/// Extracts the structured screening report from a raw model reply.
///
/// Never fails: a reply that cannot be parsed and validated is logged and
/// replaced with [`fallback_report`]. Key presence is checked; value types
/// are not, and extra keys pass through untouched.
pub fn extract_report(reply: &str) -> Value {
    match try_extract(reply) {
        Ok(report) => report,
        Err(failure) => {
            warn!("Could not extract screening report: {failure}");
            warn!("Raw model reply: {reply}");
            fallback_report()
        }
    }
}

/// Tries each candidate payload in turn: the whole reply (code fences
/// stripped), then the slice from the first `{` to the last `}`. A candidate
/// that parses but fails key validation does not end the search, so a reply
/// like `[{...report...}]` still yields the inner object via the brace scan.
fn try_extract(reply: &str) -> Result<Value, ExtractFailure> {
    if let Ok(value) = serde_json::from_str(strip_json_fences(reply)) {
        if let Ok(report) = validate_keys(value) {
            return Ok(report);
        }
    }

    validate_keys(parse_brace_slice(reply)?)
}

/// Requires all five report keys as top-level fields. The value is returned
/// unchanged on success, so extra keys survive.
fn validate_keys(value: Value) -> Result<Value, ExtractFailure> {
    for key in REQUIRED_KEYS {
        if value.get(key).is_none() {
            return Err(ExtractFailure::MissingKey(key));
        }
    }

    Ok(value)
}

/// Parses the slice spanning the first `{` to the last `}` of the reply.
fn parse_brace_slice(reply: &str) -> Result<Value, ExtractFailure> {
    let start = reply.find('{').ok_or(ExtractFailure::NoJsonObject)?;
    let end = reply.rfind('}').ok_or(ExtractFailure::NoJsonObject)?;
    if end < start {
        return Err(ExtractFailure::NoJsonObject);
    }

    Ok(serde_json::from_str(&reply[start..=end])?)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let body = match text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    {
        Some(rest) => rest.trim_start(),
        None => return text,
    };
    body.strip_suffix("```").map(str::trim).unwrap_or(body)
}

/// The fixed report returned when no valid report can be extracted.
pub fn fallback_report() -> Value {
    json!({
        "score": 70,
        "strengths": [
            "Resume is well structured",
            "Relevant skills mentioned",
            "Good formatting"
        ],
        "weaknesses": [
            "Lacks job-specific achievements",
            "No mention of leadership",
            "Missing technical keywords"
        ],
        "missing_keywords": ["Flask", "SQL", "Team management"],
        "improvement_tips": [
            "Add measurable outcomes to past roles",
            "Include relevant tools like Flask or SQL",
            "Customize summary for the job role"
        ],
        "note": FALLBACK_NOTE
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
