use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::assessor::{AssessorError, AssessorTransport, QualitativeAssessor};
use super::domain::{Idea, IdeaId, Member};
use super::evaluation::{DeterministicScorer, ScoringConfig, SubScores};
use super::locks::IdeaLocks;
use super::repository::{RepositoryError, ScoreRepository};
use super::result::ScoreResult;
use super::validation::{validate_evaluation_input, InputViolation};
use crate::config::ConfigError;

/// Score composer: validates input, runs both deterministic scorers, calls the assessor and
/// persists the blended result. Nothing is written unless every step succeeds.
pub struct IdeaScoringService<R, T> {
    repository: Arc<R>,
    assessor: Arc<QualitativeAssessor<T>>,
    scorer: DeterministicScorer,
    locks: IdeaLocks,
}

impl<R, T> IdeaScoringService<R, T>
where
    R: ScoreRepository + 'static,
    T: AssessorTransport + 'static,
{
    pub fn new(repository: Arc<R>, transport: T, config: ScoringConfig) -> Self {
        Self {
            repository,
            assessor: Arc::new(QualitativeAssessor::new(transport)),
            scorer: DeterministicScorer::new(config),
            locks: IdeaLocks::new(),
        }
    }

    pub fn scorer(&self) -> &DeterministicScorer {
        &self.scorer
    }

    /// Runs a full evaluation and upserts the result under the idea's id.
    ///
    /// Concurrent calls for the same idea are serialized; calls for different ideas proceed
    /// independently.
    pub async fn evaluate(
        &self,
        idea: &Idea,
        roster: &[Member],
    ) -> Result<ScoreResult, ScoringError> {
        validate_evaluation_input(idea, roster).map_err(ScoringError::InputValidation)?;

        let _slot = self.locks.acquire(&idea.id).await;
        let started = Instant::now();

        let deterministic = self.scorer.score(idea, roster);
        debug!(
            idea_id = %idea.id,
            team_skill = deterministic.team_skill_score,
            network = deterministic.network_score,
            "deterministic sub-scores computed"
        );

        let assessment = self.assessor.assess(idea, roster).await.map_err(|err| {
            let error = ScoringError::from(err);
            warn!(idea_id = %idea.id, kind = error.kind(), error = %error, "qualitative assessment failed");
            error
        })?;

        let composite_score = self.scorer.composite(&SubScores {
            team_skill: deterministic.team_skill_score,
            network: deterministic.network_score,
            idea_quality: assessment.idea_quality_score,
            team_idea_fit: assessment.team_idea_fit_score,
        });

        let result = ScoreResult {
            team_skill_score: deterministic.team_skill_score,
            network_score: deterministic.network_score,
            idea_quality_score: assessment.idea_quality_score,
            team_idea_fit_score: assessment.team_idea_fit_score,
            composite_score,
            time_to_first_customer: assessment.time_to_first_customer,
            ai_narrative: assessment.narrative,
            ai_reasoning: assessment.reasoning,
            model_version: self.assessor.model_version().to_string(),
            generated_at: Utc::now(),
        };

        self.repository.upsert(&idea.id, result.clone())?;

        info!(
            idea_id = %idea.id,
            composite = result.composite_score,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "idea evaluation stored"
        );
        Ok(result)
    }

    /// Current score for an idea, `None` before the first successful evaluation.
    pub fn get(&self, idea_id: &IdeaId) -> Result<Option<ScoreResult>, ScoringError> {
        Ok(self.repository.fetch(idea_id)?)
    }
}

/// Classified error returned by an evaluation attempt. All variants are terminal.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("assessor transport error: {0}")]
    AssessorTransport(String),
    #[error("malformed assessor response: {reason}")]
    MalformedAssessorResponse { reason: String, excerpt: String },
    #[error("invalid evaluation input: {}", summarize(.0))]
    InputValidation(Vec<InputViolation>),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ScoringError {
    pub const fn kind(&self) -> &'static str {
        match self {
            ScoringError::Configuration(_) => "configuration",
            ScoringError::AssessorTransport(_) => "assessor_transport",
            ScoringError::MalformedAssessorResponse { .. } => "malformed_assessor_response",
            ScoringError::InputValidation(_) => "input_validation",
            ScoringError::Repository(_) => "repository",
        }
    }
}

impl From<AssessorError> for ScoringError {
    fn from(value: AssessorError) -> Self {
        match value {
            AssessorError::Configuration(err) => ScoringError::Configuration(err),
            AssessorError::Transport(reason) => ScoringError::AssessorTransport(reason),
            AssessorError::Malformed { reason, excerpt } => {
                ScoringError::MalformedAssessorResponse { reason, excerpt }
            }
        }
    }
}

fn summarize(violations: &[InputViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
