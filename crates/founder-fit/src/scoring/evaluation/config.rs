use serde::{Deserialize, Serialize};

use super::super::domain::ConnectionStrength;
use super::super::taxonomy::SkillCategory;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Tunable constants for the deterministic scorers and the composite blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub category_weights: CategoryWeights,
    pub coverage_ceiling: f64,
    pub complementarity_bonus_max: f64,
    pub strength_multipliers: StrengthMultipliers,
    pub contact_scale: f64,
    pub size_weight: f64,
    pub relevance_weight: f64,
    pub composite_weights: CompositeWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            category_weights: CategoryWeights {
                technical: 0.40,
                business: 0.35,
                domain: 0.25,
            },
            coverage_ceiling: 90.0,
            complementarity_bonus_max: 10.0,
            strength_multipliers: StrengthMultipliers {
                warm: 1.0,
                moderate: 0.6,
                cold: 0.25,
                unrecognized: 0.25,
            },
            contact_scale: 500.0,
            size_weight: 0.6,
            relevance_weight: 0.4,
            composite_weights: CompositeWeights {
                team_skill: 0.25,
                network: 0.20,
                idea_quality: 0.30,
                team_idea_fit: 0.25,
            },
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let categories = &self.category_weights;
        check_group(
            "category_weights",
            &[categories.technical, categories.business, categories.domain],
        )?;
        check_group("network_blend", &[self.size_weight, self.relevance_weight])?;
        let composite = &self.composite_weights;
        check_group(
            "composite_weights",
            &[
                composite.team_skill,
                composite.network,
                composite.idea_quality,
                composite.team_idea_fit,
            ],
        )?;

        let multipliers = &self.strength_multipliers;
        let scalars = [
            self.coverage_ceiling,
            self.complementarity_bonus_max,
            multipliers.warm,
            multipliers.moderate,
            multipliers.cold,
            multipliers.unrecognized,
        ];
        if scalars.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ScoringConfigError::NegativeValue);
        }
        if !self.contact_scale.is_finite() || self.contact_scale <= 0.0 {
            return Err(ScoringConfigError::InvalidContactScale(self.contact_scale));
        }
        Ok(())
    }
}

fn check_group(group: &'static str, weights: &[f64]) -> Result<(), ScoringConfigError> {
    if weights.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
        return Err(ScoringConfigError::NegativeValue);
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ScoringConfigError::WeightsDoNotSumToOne { group, sum });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub technical: f64,
    pub business: f64,
    pub domain: f64,
}

impl CategoryWeights {
    pub fn weight(&self, category: SkillCategory) -> f64 {
        match category {
            SkillCategory::Technical => self.technical,
            SkillCategory::Business => self.business,
            SkillCategory::Domain => self.domain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthMultipliers {
    pub warm: f64,
    pub moderate: f64,
    pub cold: f64,
    pub unrecognized: f64,
}

impl StrengthMultipliers {
    pub fn multiplier(&self, strength: ConnectionStrength) -> f64 {
        match strength {
            ConnectionStrength::Warm => self.warm,
            ConnectionStrength::Moderate => self.moderate,
            ConnectionStrength::Cold => self.cold,
            ConnectionStrength::Unrecognized => self.unrecognized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub team_skill: f64,
    pub network: f64,
    pub idea_quality: f64,
    pub team_idea_fit: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("{group} must sum to 1.0 (found {sum:.4})")]
    WeightsDoNotSumToOne { group: &'static str, sum: f64 },
    #[error("weights and multipliers must be finite and non-negative")]
    NegativeValue,
    #[error("contact scale must be positive (found {0})")]
    InvalidContactScale(f64),
}
