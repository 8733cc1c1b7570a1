use super::config::CompositeWeights;

/// The four sub-scores that feed the composite, each already in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub team_skill: f64,
    pub network: f64,
    pub idea_quality: f64,
    pub team_idea_fit: f64,
}

pub fn composite_score(scores: &SubScores, weights: &CompositeWeights) -> f64 {
    let blended = weights.team_skill * scores.team_skill
        + weights.network * scores.network
        + weights.idea_quality * scores.idea_quality
        + weights.team_idea_fit * scores.team_idea_fit;
    blended.clamp(0.0, 100.0)
}
