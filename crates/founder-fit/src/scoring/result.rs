use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::reasoning::ReasoningEnvelope;

/// Persisted outcome of one full evaluation. Replaced wholesale on re-evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub team_skill_score: f64,
    pub network_score: f64,
    pub idea_quality_score: f64,
    pub team_idea_fit_score: f64,
    pub composite_score: f64,
    pub time_to_first_customer: String,
    pub ai_narrative: String,
    pub ai_reasoning: ReasoningEnvelope,
    pub model_version: String,
    pub generated_at: DateTime<Utc>,
}

impl ScoreResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.composite_score)
    }

    pub fn summary_view(&self) -> ScoreSummaryView {
        ScoreSummaryView {
            composite: format_score(self.composite_score),
            band: self.band(),
            team_skill: format_score(self.team_skill_score),
            network: format_score(self.network_score),
            idea_quality: format_score(self.idea_quality_score),
            team_idea_fit: format_score(self.team_idea_fit_score),
            time_to_first_customer: self.time_to_first_customer.clone(),
            recommendation: self.ai_reasoning.recommendation,
        }
    }
}

/// Coarse traffic-light bucket for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            ScoreBand::Strong
        } else if score >= 50.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Weak => "weak",
        }
    }
}

/// Rounds a score for display.
pub fn format_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

/// Compact, display-ready projection of a stored result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummaryView {
    pub composite: u8,
    pub band: ScoreBand,
    pub team_skill: u8,
    pub network: u8,
    pub idea_quality: u8,
    pub team_idea_fit: u8,
    pub time_to_first_customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<super::reasoning::Recommendation>,
}
