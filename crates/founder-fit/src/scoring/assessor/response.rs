use serde_json::{Map, Value};

use super::super::reasoning::{Recommendation, ReasoningEnvelope};
use super::AssessorError;

const EXCERPT_CHARS: usize = 300;

/// Validated output of the qualitative assessor, scores already clamped to [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct AIScoreResult {
    pub idea_quality_score: f64,
    pub team_idea_fit_score: f64,
    pub time_to_first_customer: String,
    pub narrative: String,
    pub reasoning: ReasoningEnvelope,
}

/// Parses raw model text into an `AIScoreResult`.
///
/// Only the two scores and the two required strings are checked; `reasoning` is carried as an
/// opaque versioned payload.
pub fn parse_assessment(raw: &str) -> Result<AIScoreResult, AssessorError> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body).map_err(|err| AssessorError::Malformed {
        reason: format!("response is not valid JSON ({err})"),
        excerpt: excerpt(raw),
    })?;

    let Value::Object(mut fields) = value else {
        return Err(AssessorError::Malformed {
            reason: "response is not a JSON object".to_string(),
            excerpt: excerpt(raw),
        });
    };

    let idea_quality_score = required_number(&fields, "ideaQualityScore", raw)?;
    let team_idea_fit_score = required_number(&fields, "teamIdeaFitScore", raw)?;
    let time_to_first_customer = required_string(&mut fields, "timeToFirstCustomer", raw)?;
    let narrative = required_string(&mut fields, "narrative", raw)?;

    let recommendation = fields
        .remove("recommendation")
        .and_then(|raw| serde_json::from_value::<Recommendation>(raw).ok());
    let overall_viability_score = fields.get("overallViabilityScore").and_then(Value::as_f64);
    let reasoning = fields
        .remove("reasoning")
        .unwrap_or_else(|| Value::Object(Map::new()));

    Ok(AIScoreResult {
        idea_quality_score: clamp_score(idea_quality_score),
        team_idea_fit_score: clamp_score(team_idea_fit_score),
        time_to_first_customer,
        narrative,
        reasoning: ReasoningEnvelope::current(reasoning, recommendation, overall_viability_score),
    })
}

/// Removes a surrounding markdown fence (```json ... ```) if the model added one anyway.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

fn required_number(fields: &Map<String, Value>, key: &str, raw: &str) -> Result<f64, AssessorError> {
    fields
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| missing(key, "number", raw))
}

fn required_string(
    fields: &mut Map<String, Value>,
    key: &str,
    raw: &str,
) -> Result<String, AssessorError> {
    match fields.remove(key) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(missing(key, "string", raw)),
    }
}

fn missing(key: &str, expected: &str, raw: &str) -> AssessorError {
    AssessorError::Malformed {
        reason: format!("required field `{key}` is missing or not a {expected}"),
        excerpt: excerpt(raw),
    }
}

/// First few hundred characters of the raw text, cut on a char boundary.
pub fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_CHARS).collect()
}
