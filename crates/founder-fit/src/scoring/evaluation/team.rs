use std::collections::HashMap;

use super::super::domain::Member;
use super::super::taxonomy::SkillCategory;
use super::config::ScoringConfig;

/// Coverage of the taxonomy by the combined roster, plus a bonus for skills that are not
/// duplicated across members. Returns 0 for an empty roster or a roster without skills.
pub(crate) fn team_skill_score(roster: &[Member], config: &ScoringConfig) -> f64 {
    let mut holders: HashMap<&str, usize> = HashMap::new();
    for member in roster {
        for skill in member.skills() {
            *holders.entry(skill).or_default() += 1;
        }
    }

    if holders.is_empty() {
        return 0.0;
    }

    let weighted_coverage: f64 = SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let skills = category.skills();
            let covered = skills
                .iter()
                .filter(|skill| holders.contains_key(*skill))
                .count();
            config.category_weights.weight(category) * covered as f64 / skills.len() as f64
        })
        .sum();

    let duplicated = holders.values().filter(|count| **count > 1).count();
    let complementarity = (1.0 - duplicated as f64 / holders.len() as f64).max(0.0);
    let bonus = complementarity * config.complementarity_bonus_max;

    (weighted_coverage * config.coverage_ceiling + bonus).clamp(0.0, 100.0)
}
