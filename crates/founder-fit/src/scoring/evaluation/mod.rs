mod composite;
mod config;
mod network;
mod team;

pub use composite::{composite_score, SubScores};
pub use config::{
    CategoryWeights, CompositeWeights, ScoringConfig, ScoringConfigError, StrengthMultipliers,
};

use super::domain::{roster_network, Idea, Member};
use serde::{Deserialize, Serialize};

/// Pure evaluator for the two sub-scores that need no external call.
#[derive(Debug, Clone)]
pub struct DeterministicScorer {
    config: ScoringConfig,
}

impl DeterministicScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, idea: &Idea, roster: &[Member]) -> DeterministicScores {
        let entries = roster_network(roster);
        DeterministicScores {
            team_skill_score: team::team_skill_score(roster, &self.config),
            network_score: network::network_score(&entries, &idea.industry, &self.config),
        }
    }

    pub fn team_skill_score(&self, roster: &[Member]) -> f64 {
        team::team_skill_score(roster, &self.config)
    }

    pub fn network_score(&self, roster: &[Member], idea_industry: &str) -> f64 {
        network::network_score(&roster_network(roster), idea_industry, &self.config)
    }

    pub fn composite(&self, scores: &SubScores) -> f64 {
        composite_score(scores, &self.config.composite_weights)
    }
}

impl Default for DeterministicScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeterministicScores {
    pub team_skill_score: f64,
    pub network_score: f64,
}
