use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::domain::Member;
use super::reasoning::Reasoning;
use super::taxonomy::SkillCategory;

/// How much of the assessor's required-skill list the current team already holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCoverage {
    pub categories: BTreeMap<SkillCategory, CategoryCoverage>,
    pub covered_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCoverage {
    pub covered: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

impl SkillCoverage {
    /// Returns `None` when the reasoning names no required skills from the taxonomy.
    pub fn from_reasoning(reasoning: &Reasoning, roster: &[Member]) -> Option<Self> {
        let required: HashSet<&str> = reasoning
            .required_skills()
            .iter()
            .map(String::as_str)
            .collect();
        let team: HashSet<&str> = roster.iter().flat_map(|member| member.skills()).collect();

        let mut categories = BTreeMap::new();
        let mut covered_count = 0;
        let mut total = 0;

        for category in SkillCategory::ALL {
            let mut entry = CategoryCoverage::default();
            for skill in category.skills().iter().copied() {
                if !required.contains(skill) {
                    continue;
                }
                total += 1;
                if team.contains(skill) {
                    covered_count += 1;
                    entry.covered.push(skill);
                } else {
                    entry.missing.push(skill);
                }
            }
            if !entry.covered.is_empty() || !entry.missing.is_empty() {
                categories.insert(category, entry);
            }
        }

        if total == 0 {
            return None;
        }

        Some(Self {
            categories,
            covered_count,
            total,
        })
    }

    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .values()
            .flat_map(|entry| entry.missing.iter().copied())
    }
}
