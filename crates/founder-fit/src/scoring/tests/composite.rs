use super::common::*;

use crate::scoring::assessor::parse_assessment;
use crate::scoring::evaluation::{composite_score, DeterministicScorer, ScoringConfig, SubScores};

#[test]
fn blends_sub_scores_with_default_weights() {
    let scores = SubScores {
        team_skill: 80.0,
        network: 60.0,
        idea_quality: 70.0,
        team_idea_fit: 90.0,
    };
    assert_close(DeterministicScorer::default().composite(&scores), 75.5);
}

#[test]
fn composite_stays_within_bounds_for_extreme_inputs() {
    let weights = ScoringConfig::default().composite_weights;
    let high = SubScores {
        team_skill: 100.0,
        network: 100.0,
        idea_quality: 100.0,
        team_idea_fit: 100.0,
    };
    let low = SubScores {
        team_skill: 0.0,
        network: 0.0,
        idea_quality: 0.0,
        team_idea_fit: 0.0,
    };
    assert_close(composite_score(&high, &weights), 100.0);
    assert_close(composite_score(&low, &weights), 0.0);
}

#[test]
fn out_of_range_assessor_scores_are_clamped_before_blending() {
    let high = parse_assessment(&assessor_reply(150.0, 50.0)).expect("valid reply");
    let low = parse_assessment(&assessor_reply(-5.0, 50.0)).expect("valid reply");
    assert_eq!(high.idea_quality_score, 100.0);
    assert_eq!(low.idea_quality_score, 0.0);

    let scorer = DeterministicScorer::default();
    let composite = scorer.composite(&SubScores {
        team_skill: 0.0,
        network: 0.0,
        idea_quality: high.idea_quality_score,
        team_idea_fit: high.team_idea_fit_score,
    });
    assert_close(composite, 0.30 * 100.0 + 0.25 * 50.0);
}
