use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::domain::IdeaId;
use super::result::ScoreResult;

/// Keyed store holding at most one score per idea.
pub trait ScoreRepository: Send + Sync {
    /// Creates or wholesale-replaces the score for `idea_id`.
    fn upsert(&self, idea_id: &IdeaId, result: ScoreResult) -> Result<(), RepositoryError>;
    fn fetch(&self, idea_id: &IdeaId) -> Result<Option<ScoreResult>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository used by the service binary and tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScoreRepository {
    records: Arc<Mutex<HashMap<IdeaId, ScoreResult>>>,
}

impl InMemoryScoreRepository {
    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn upsert(&self, idea_id: &IdeaId, result: ScoreResult) -> Result<(), RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("score store mutex poisoned".to_string()))?;
        guard.insert(idea_id.clone(), result);
        Ok(())
    }

    fn fetch(&self, idea_id: &IdeaId) -> Result<Option<ScoreResult>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("score store mutex poisoned".to_string()))?;
        Ok(guard.get(idea_id).cloned())
    }
}
