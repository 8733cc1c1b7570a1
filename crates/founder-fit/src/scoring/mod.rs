//! Scoring engine for startup ideas evaluated against a founding team.
//!
//! Two sub-scores are deterministic (`evaluation`): team skill coverage and network reach.
//! Two come from an external language-model assessor (`assessor`). The composer in `service`
//! blends all four into a composite and keeps exactly one current result per idea.

pub mod assessor;
pub mod coverage;
pub mod domain;
pub mod evaluation;
pub mod locks;
pub mod reasoning;
pub mod repository;
pub mod result;
pub mod router;
pub mod service;
pub mod taxonomy;
pub mod validation;

#[cfg(test)]
mod tests;

pub use assessor::{
    AIScoreResult, AnthropicTransport, AssessmentPrompt, AssessorError, AssessorTransport,
    QualitativeAssessor,
};
pub use coverage::{CategoryCoverage, SkillCoverage};
pub use domain::{
    roster_network, ConnectionStrength, Idea, IdeaId, Member, MemberId, NetworkEntry, Profile,
    Visibility,
};
pub use evaluation::{
    composite_score, CategoryWeights, CompositeWeights, DeterministicScorer, DeterministicScores,
    ScoringConfig, ScoringConfigError, StrengthMultipliers, SubScores,
};
pub use locks::IdeaLocks;
pub use reasoning::{Reasoning, ReasoningEnvelope, Recommendation, CURRENT_REASONING_VERSION};
pub use repository::{InMemoryScoreRepository, RepositoryError, ScoreRepository};
pub use result::{format_score, ScoreBand, ScoreResult, ScoreSummaryView};
pub use router::{scoring_router, EvaluationRequest};
pub use service::{IdeaScoringService, ScoringError};
pub use taxonomy::SkillCategory;
pub use validation::{validate_evaluation_input, InputViolation};
