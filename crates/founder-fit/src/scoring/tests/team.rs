use super::common::*;

use crate::scoring::domain::{Member, MemberId};
use crate::scoring::evaluation::DeterministicScorer;
use crate::scoring::taxonomy::{SkillCategory, BUSINESS_SKILLS, DOMAIN_SKILLS, TECHNICAL_SKILLS};

#[test]
fn empty_roster_scores_zero() {
    let scorer = DeterministicScorer::default();
    assert_eq!(scorer.team_skill_score(&[]), 0.0);
}

#[test]
fn members_without_profiles_or_skills_score_zero() {
    let scorer = DeterministicScorer::default();
    let roster = vec![
        Member {
            id: MemberId("ghost".to_string()),
            name: String::new(),
            profile: None,
        },
        member("blank", &[]),
    ];
    assert_eq!(scorer.team_skill_score(&roster), 0.0);
}

#[test]
fn complete_non_overlapping_coverage_reaches_the_maximum() {
    let scorer = DeterministicScorer::default();
    let roster = vec![
        member("tech", TECHNICAL_SKILLS),
        member("biz", BUSINESS_SKILLS),
        member("domain", DOMAIN_SKILLS),
    ];
    assert_close(scorer.team_skill_score(&roster), 100.0);
}

#[test]
fn single_skill_earns_weighted_coverage_plus_full_bonus() {
    let scorer = DeterministicScorer::default();
    let score = scorer.team_skill_score(&[member("solo", &["sales"])]);
    // 0.35 * (1 / 12) * 90 + 10
    assert_close(score, 12.625);
}

#[test]
fn one_full_category_is_weighted_by_that_category() {
    let scorer = DeterministicScorer::default();
    let score = scorer.team_skill_score(&[member("tech", SkillCategory::Technical.skills())]);
    assert_close(score, 0.40 * 90.0 + 10.0);
}

#[test]
fn duplicated_skills_score_below_split_skills_at_equal_coverage() {
    let scorer = DeterministicScorer::default();
    let split = vec![
        member("a", &["full-stack-dev", "sales", "edtech"]),
        member("b", &["ml-ai", "marketing-growth", "fintech-banking"]),
    ];
    let union = [
        "full-stack-dev",
        "sales",
        "edtech",
        "ml-ai",
        "marketing-growth",
        "fintech-banking",
    ];
    let duplicated = vec![member("a", &union), member("b", &union)];

    let split_score = scorer.team_skill_score(&split);
    let duplicated_score = scorer.team_skill_score(&duplicated);

    assert!(
        duplicated_score < split_score,
        "duplicated {duplicated_score} should be below split {split_score}"
    );
    // Fully duplicated teams lose the entire complementarity bonus.
    assert_close(split_score - duplicated_score, 10.0);
}

#[test]
fn partial_duplication_scales_the_bonus() {
    let scorer = DeterministicScorer::default();
    let roster = vec![
        member("a", &["sales", "operations"]),
        member("b", &["sales", "edtech"]),
    ];
    // Three distinct skills, one duplicated.
    let coverage = 0.35 * 2.0 / 12.0 + 0.25 * 1.0 / 23.0;
    let expected = coverage * 90.0 + (1.0 - 1.0 / 3.0) * 10.0;
    assert_close(scorer.team_skill_score(&roster), expected);
}
