//! Schema-versioned storage for the assessor's structured reasoning.
//!
//! The assessor contract has changed shape over time. Stored results keep the raw payload plus
//! the version it was produced under, so older rows stay readable after the contract evolves.
//! Fresh payloads are tagged with the version this build requests. Blobs written before the
//! envelope existed are classified by shape on read. Viability scores are clamped either way.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::assessor::clamp_score;

/// Contract version requested from the assessor by this build.
pub const CURRENT_REASONING_VERSION: u16 = 2;

/// Top-level keys that only appear in the richer (v2) contract.
const V2_ONLY_KEYS: &[&str] = &["marketSizing", "requiredSkills", "missingSkills", "competitorFlags"];

/// Nested keys that only appear in the v2 contract, grouped by their parent section.
const V2_ONLY_NESTED_KEYS: &[(&str, &[&str])] = &[
    ("ideaQuality", &["defensibility", "revenueModel"]),
    ("teamFit", &["founderMarketFit", "executionRisk"]),
    ("timeEstimate", &["pessimistic", "blockers"]),
];

/// Top-level verdict the assessor attaches to its reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    Pass,
    Watch,
    ConditionalProceed,
    Proceed,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Pass => "pass",
            Recommendation::Watch => "watch",
            Recommendation::ConditionalProceed => "conditional proceed",
            Recommendation::Proceed => "proceed",
        }
    }
}

/// Persisted reasoning blob: version tag, verdict fields and the untouched payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct ReasoningEnvelope {
    pub schema_version: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_viability_score: Option<f64>,
    pub reasoning: Value,
}

impl ReasoningEnvelope {
    /// Wraps a payload produced under the contract this build requests.
    pub fn current(
        reasoning: Value,
        recommendation: Option<Recommendation>,
        overall_viability_score: Option<f64>,
    ) -> Self {
        Self {
            schema_version: CURRENT_REASONING_VERSION,
            recommendation,
            overall_viability_score: overall_viability_score.map(clamp_score),
            reasoning,
        }
    }

    /// Wraps a payload of unknown provenance, tagging it with the version its shape matches.
    pub fn classify(
        reasoning: Value,
        recommendation: Option<Recommendation>,
        overall_viability_score: Option<f64>,
    ) -> Self {
        Self {
            schema_version: detect_version(&reasoning),
            recommendation,
            overall_viability_score: overall_viability_score.map(clamp_score),
            reasoning,
        }
    }

    /// Interprets the payload according to its version. Never fails: payloads that match
    /// no known version come back as `Reasoning::Unrecognized`.
    pub fn decode(&self) -> Reasoning {
        match self.schema_version {
            1 => serde_json::from_value(self.reasoning.clone())
                .map(Reasoning::V1)
                .unwrap_or_else(|_| Reasoning::Unrecognized(self.reasoning.clone())),
            2 => serde_json::from_value(self.reasoning.clone())
                .map(Reasoning::V2)
                .unwrap_or_else(|_| Reasoning::Unrecognized(self.reasoning.clone())),
            _ => Reasoning::Unrecognized(self.reasoning.clone()),
        }
    }
}

impl From<Value> for ReasoningEnvelope {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("schemaVersion") => {
                let schema_version = map
                    .remove("schemaVersion")
                    .and_then(|version| version.as_u64())
                    .and_then(|version| u16::try_from(version).ok())
                    .unwrap_or(0);
                let recommendation = map
                    .remove("recommendation")
                    .and_then(|raw| serde_json::from_value(raw).ok());
                let overall_viability_score = map
                    .remove("overallViabilityScore")
                    .and_then(|raw| raw.as_f64())
                    .map(clamp_score);
                let reasoning = map.remove("reasoning").unwrap_or(Value::Null);
                Self {
                    schema_version,
                    recommendation,
                    overall_viability_score,
                    reasoning,
                }
            }
            Value::Object(map) => from_legacy(map),
            other => Self {
                schema_version: 0,
                recommendation: None,
                overall_viability_score: None,
                reasoning: other,
            },
        }
    }
}

/// Legacy rows stored the reasoning flat, with verdict fields merged into the same object.
fn from_legacy(mut map: Map<String, Value>) -> ReasoningEnvelope {
    let recommendation = map
        .remove("recommendation")
        .and_then(|raw| serde_json::from_value(raw).ok());
    let overall_viability_score = map
        .remove("overallViabilityScore")
        .and_then(|raw| raw.as_f64());
    ReasoningEnvelope::classify(Value::Object(map), recommendation, overall_viability_score)
}

fn detect_version(reasoning: &Value) -> u16 {
    match reasoning {
        Value::Object(map) if has_v2_marker(map) => 2,
        Value::Object(_) => 1,
        _ => 0,
    }
}

fn has_v2_marker(map: &Map<String, Value>) -> bool {
    V2_ONLY_KEYS.iter().any(|key| map.contains_key(*key))
        || V2_ONLY_NESTED_KEYS.iter().any(|(section, keys)| {
            map.get(*section)
                .and_then(Value::as_object)
                .is_some_and(|nested| keys.iter().any(|key| nested.contains_key(*key)))
        })
}

/// Typed view over a stored reasoning payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Reasoning {
    V1(ReasoningV1),
    V2(ReasoningV2),
    Unrecognized(Value),
}

impl Reasoning {
    pub fn required_skills(&self) -> &[String] {
        match self {
            Reasoning::V2(reasoning) => &reasoning.required_skills,
            Reasoning::V1(_) | Reasoning::Unrecognized(_) => &[],
        }
    }

    pub fn gaps(&self) -> &[String] {
        match self {
            Reasoning::V1(reasoning) => &reasoning.team_fit.gaps,
            Reasoning::V2(reasoning) => &reasoning.team_fit.gaps,
            Reasoning::Unrecognized(_) => &[],
        }
    }

    pub fn key_risks(&self) -> &[String] {
        match self {
            Reasoning::V1(reasoning) => &reasoning.time_estimate.key_risks,
            Reasoning::V2(reasoning) => &reasoning.time_estimate.key_risks,
            Reasoning::Unrecognized(_) => &[],
        }
    }
}

/// Narrow contract: three idea sub-scores, two team sub-scores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReasoningV1 {
    pub idea_quality: IdeaQualityV1,
    pub team_fit: TeamFitV1,
    pub time_estimate: TimeEstimateV1,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaQualityV1 {
    pub problem_clarity: Option<f64>,
    pub market_opportunity: Option<f64>,
    pub competitive_landscape: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamFitV1 {
    pub skill_alignment: Option<f64>,
    pub domain_experience: Option<f64>,
    pub gaps: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeEstimateV1 {
    pub optimistic: String,
    pub realistic: String,
    pub key_risks: Vec<String>,
}

/// Rich contract requested by the current prompt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReasoningV2 {
    pub idea_quality: IdeaQualityV2,
    pub team_fit: TeamFitV2,
    pub time_estimate: TimeEstimateV2,
    pub market_sizing: MarketSizing,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub competitor_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeaQualityV2 {
    pub problem_clarity: Option<f64>,
    pub market_opportunity: Option<f64>,
    pub competitive_landscape: Option<f64>,
    pub defensibility: Option<f64>,
    pub revenue_model: Option<f64>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamFitV2 {
    pub skill_alignment: Option<f64>,
    pub domain_experience: Option<f64>,
    pub founder_market_fit: Option<f64>,
    pub execution_risk: Option<f64>,
    pub gaps: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeEstimateV2 {
    pub optimistic: String,
    pub realistic: String,
    pub pessimistic: String,
    pub key_risks: Vec<String>,
    pub blockers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketSizing {
    pub tam: String,
    pub sam: String,
    pub initial_wedge: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn narrow_payload() -> Value {
        json!({
            "ideaQuality": { "problemClarity": 6, "marketOpportunity": 5, "competitiveLandscape": 4, "notes": "crowded" },
            "teamFit": { "skillAlignment": 7, "domainExperience": 3, "gaps": ["no clinical buyer access"], "notes": "thin" },
            "timeEstimate": { "optimistic": "3 months", "realistic": "6 months", "keyRisks": ["procurement"] }
        })
    }

    fn rich_payload() -> Value {
        json!({
            "ideaQuality": { "problemClarity": 8, "defensibility": 4, "notes": "switching cost is low" },
            "teamFit": { "founderMarketFit": 6, "gaps": [], "notes": "" },
            "timeEstimate": { "optimistic": "2 months", "realistic": "5 months", "pessimistic": "12 months", "keyRisks": [], "blockers": ["pilot partner"] },
            "marketSizing": { "tam": "$4B", "sam": "$400M", "initialWedge": "rural clinics" },
            "requiredSkills": ["full-stack-dev", "sales", "healthcare-medtech"],
            "missingSkills": ["sales"],
            "competitorFlags": ["Epic"]
        })
    }

    #[test]
    fn classify_tags_payload_by_shape() {
        assert_eq!(ReasoningEnvelope::classify(narrow_payload(), None, None).schema_version, 1);
        assert_eq!(ReasoningEnvelope::classify(rich_payload(), None, None).schema_version, 2);
        assert_eq!(ReasoningEnvelope::classify(Value::Null, None, None).schema_version, 0);
    }

    #[test]
    fn fresh_payloads_carry_the_current_version_whatever_their_shape() {
        let sparse = ReasoningEnvelope::current(json!({}), None, Some(250.0));
        assert_eq!(sparse.schema_version, CURRENT_REASONING_VERSION);
        assert_eq!(sparse.overall_viability_score, Some(100.0));
        assert!(matches!(sparse.decode(), Reasoning::V2(_)));
    }

    #[test]
    fn nested_v2_keys_alone_classify_a_legacy_blob_as_v2() {
        let legacy = json!({
            "ideaQuality": { "problemClarity": 7, "defensibility": 3, "revenueModel": 6 },
            "teamFit": { "founderMarketFit": 5, "executionRisk": 8 },
            "timeEstimate": { "realistic": "6 months", "pessimistic": "14 months", "blockers": ["FDA"] }
        });

        let envelope: ReasoningEnvelope = serde_json::from_value(legacy).expect("legacy reads");
        assert_eq!(envelope.schema_version, 2);
        match envelope.decode() {
            Reasoning::V2(reasoning) => {
                assert_eq!(reasoning.idea_quality.defensibility, Some(3.0));
                assert_eq!(reasoning.team_fit.execution_risk, Some(8.0));
                assert_eq!(reasoning.time_estimate.blockers, vec!["FDA".to_string()]);
            }
            other => panic!("expected v2 reasoning, got {other:?}"),
        }

        let only_blockers = json!({ "timeEstimate": { "blockers": [] } });
        assert_eq!(ReasoningEnvelope::classify(only_blockers, None, None).schema_version, 2);
    }

    #[test]
    fn stored_viability_scores_are_clamped_on_read() {
        let legacy: ReasoningEnvelope =
            serde_json::from_value(json!({ "ideaQuality": {}, "overallViabilityScore": 140 }))
                .expect("legacy reads");
        assert_eq!(legacy.overall_viability_score, Some(100.0));

        let enveloped: ReasoningEnvelope = serde_json::from_value(json!({
            "schemaVersion": 1,
            "overallViabilityScore": -12,
            "reasoning": {}
        }))
        .expect("envelope reads");
        assert_eq!(enveloped.overall_viability_score, Some(0.0));
    }

    #[test]
    fn enveloped_blob_survives_a_storage_trip() {
        let envelope = ReasoningEnvelope::current(
            rich_payload(),
            Some(Recommendation::ConditionalProceed),
            Some(64.0),
        );
        let stored = serde_json::to_value(&envelope).expect("serializes");
        assert_eq!(stored["schemaVersion"], json!(2));
        assert_eq!(stored["recommendation"], json!("conditional-proceed"));

        let restored: ReasoningEnvelope = serde_json::from_value(stored).expect("deserializes");
        assert_eq!(restored, envelope);
    }

    #[test]
    fn legacy_flat_blob_is_classified_and_verdict_extracted() {
        let mut legacy = rich_payload();
        legacy["recommendation"] = json!("watch");
        legacy["overallViabilityScore"] = json!(58);

        let envelope: ReasoningEnvelope = serde_json::from_value(legacy).expect("legacy reads");
        assert_eq!(envelope.schema_version, 2);
        assert_eq!(envelope.recommendation, Some(Recommendation::Watch));
        assert_eq!(envelope.overall_viability_score, Some(58.0));
        assert!(envelope.reasoning.get("recommendation").is_none());

        match envelope.decode() {
            Reasoning::V2(reasoning) => {
                assert_eq!(reasoning.market_sizing.initial_wedge, "rural clinics");
                assert_eq!(reasoning.missing_skills, vec!["sales".to_string()]);
            }
            other => panic!("expected v2 reasoning, got {other:?}"),
        }
    }

    #[test]
    fn narrow_blob_decodes_as_v1() {
        let envelope: ReasoningEnvelope =
            serde_json::from_value(narrow_payload()).expect("legacy reads");
        let reasoning = envelope.decode();
        assert!(matches!(reasoning, Reasoning::V1(_)));
        assert_eq!(reasoning.gaps(), ["no clinical buyer access".to_string()]);
        assert_eq!(reasoning.key_risks(), ["procurement".to_string()]);
        assert!(reasoning.required_skills().is_empty());
    }

    #[test]
    fn mistyped_payload_is_unrecognized_rather_than_an_error() {
        let envelope = ReasoningEnvelope {
            schema_version: 2,
            recommendation: None,
            overall_viability_score: None,
            reasoning: json!({ "requiredSkills": "not-a-list" }),
        };
        assert!(matches!(envelope.decode(), Reasoning::Unrecognized(_)));

        let future = ReasoningEnvelope {
            schema_version: 7,
            ..envelope
        };
        assert!(matches!(future.decode(), Reasoning::Unrecognized(_)));
    }
}
