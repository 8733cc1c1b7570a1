use super::common::*;

use crate::scoring::assessor::parse_assessment;
use crate::scoring::coverage::SkillCoverage;
use crate::scoring::reasoning::{Reasoning, ReasoningV2};
use crate::scoring::taxonomy::SkillCategory;

fn reasoning_requiring(skills: &[&str]) -> Reasoning {
    Reasoning::V2(ReasoningV2 {
        required_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        ..ReasoningV2::default()
    })
}

#[test]
fn groups_required_skills_by_category() {
    let assessment = parse_assessment(&assessor_reply(60.0, 60.0)).expect("valid reply");
    let coverage = SkillCoverage::from_reasoning(&assessment.reasoning.decode(), &roster())
        .expect("required skills present");

    assert_eq!(coverage.total, 3);
    assert_eq!(coverage.covered_count, 2);
    assert_eq!(
        coverage.categories[&SkillCategory::Technical].covered,
        vec!["full-stack-dev"]
    );
    assert_eq!(
        coverage.categories[&SkillCategory::Business].missing,
        vec!["legal-compliance"]
    );
    assert_eq!(
        coverage.categories[&SkillCategory::Domain].covered,
        vec!["healthcare-medtech"]
    );
    assert_eq!(coverage.missing().collect::<Vec<_>>(), vec!["legal-compliance"]);
}

#[test]
fn unknown_and_duplicate_required_skills_are_ignored() {
    let reasoning = reasoning_requiring(&["ml-ai", "time-travel", "ml-ai", "sales"]);
    let coverage =
        SkillCoverage::from_reasoning(&reasoning, &[member("a", &["sales"])]).expect("coverage");

    assert_eq!(coverage.total, 2);
    assert_eq!(coverage.covered_count, 1);
    assert!(!coverage.categories.contains_key(&SkillCategory::Domain));
}

#[test]
fn taxonomy_order_is_preserved() {
    let reasoning = reasoning_requiring(&["embedded-iot", "full-stack-dev", "ml-ai"]);
    let coverage = SkillCoverage::from_reasoning(&reasoning, &[]).expect("coverage");

    assert_eq!(
        coverage.categories[&SkillCategory::Technical].missing,
        vec!["full-stack-dev", "ml-ai", "embedded-iot"]
    );
}

#[test]
fn no_required_skills_yields_none() {
    assert!(SkillCoverage::from_reasoning(&reasoning_requiring(&[]), &roster()).is_none());
    assert!(SkillCoverage::from_reasoning(&reasoning_requiring(&["made-up"]), &roster()).is_none());
    assert!(SkillCoverage::from_reasoning(
        &Reasoning::Unrecognized(serde_json::Value::Null),
        &roster()
    )
    .is_none());
}
