//! Client side of the external qualitative assessor.
//!
//! `prompt` partitions the request into a static instruction block, a cacheable team segment
//! and a per-call idea segment. `response` validates and clamps whatever comes back. The
//! transport itself sits behind [`AssessorTransport`] so the composer can be driven without
//! network access.

mod anthropic;
mod prompt;
mod response;

pub use anthropic::AnthropicTransport;
pub use prompt::{idea_payload, instructions, team_context, AssessmentPrompt};
pub use response::{clamp_score, excerpt, parse_assessment, strip_code_fence, AIScoreResult};

use async_trait::async_trait;
use tracing::debug;

use super::domain::{Idea, Member};
use crate::config::ConfigError;

/// Failure classes for one assessor call. None of them is retried here.
#[derive(Debug, thiserror::Error)]
pub enum AssessorError {
    #[error("assessor is not configured: {0}")]
    Configuration(#[from] ConfigError),
    #[error("assessor transport failed: {0}")]
    Transport(String),
    #[error("assessor returned a malformed response: {reason}")]
    Malformed { reason: String, excerpt: String },
}

/// Sends a prepared prompt to a language model and returns its raw text reply.
#[async_trait]
pub trait AssessorTransport: Send + Sync {
    /// Identifier of the model answering, recorded alongside stored scores.
    fn model_version(&self) -> &str;

    async fn complete(&self, prompt: &AssessmentPrompt) -> Result<String, AssessorError>;
}

/// Builds the prompt, invokes the transport and validates the reply.
pub struct QualitativeAssessor<T> {
    transport: T,
}

impl<T> QualitativeAssessor<T>
where
    T: AssessorTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn model_version(&self) -> &str {
        self.transport.model_version()
    }

    pub async fn assess(&self, idea: &Idea, roster: &[Member]) -> Result<AIScoreResult, AssessorError> {
        let prompt = AssessmentPrompt::build(idea, roster);
        debug!(
            idea_id = %idea.id,
            team_context_bytes = prompt.team_context.len(),
            idea_bytes = prompt.idea.len(),
            "dispatching qualitative assessment"
        );

        let raw = self.transport.complete(&prompt).await?;
        parse_assessment(&raw)
    }
}
