use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Value};

use crate::scoring::assessor::{AssessmentPrompt, AssessorError, AssessorTransport};
use crate::scoring::domain::{
    ConnectionStrength, Idea, IdeaId, Member, MemberId, NetworkEntry, Profile, Visibility,
};
use crate::scoring::evaluation::ScoringConfig;
use crate::scoring::repository::{
    InMemoryScoreRepository, RepositoryError, ScoreRepository,
};
use crate::scoring::result::ScoreResult;
use crate::scoring::service::IdeaScoringService;

pub(super) const MODEL: &str = "stub-model-1";

pub(super) fn idea(id: &str) -> Idea {
    Idea {
        id: IdeaId(id.to_string()),
        title: "Clinic intake copilot".to_string(),
        problem_statement: "Front-desk staff re-key insurance details from paper forms."
            .to_string(),
        target_customer: "Independent outpatient clinics".to_string(),
        industry: "healthcare-medtech".to_string(),
        notes: None,
        visibility: Visibility::Workspace,
    }
}

pub(super) fn member(id: &str, skills: &[&str]) -> Member {
    member_with_network(id, skills, Vec::new())
}

pub(super) fn member_with_network(
    id: &str,
    skills: &[&str],
    network_entries: Vec<NetworkEntry>,
) -> Member {
    Member {
        id: MemberId(id.to_string()),
        name: id.to_uppercase(),
        profile: Some(Profile {
            background: format!("{id} background"),
            skills: skills.iter().map(|skill| skill.to_string()).collect::<BTreeSet<_>>(),
            network_entries,
        }),
    }
}

pub(super) fn entry(industry: &str, contacts: u32, strength: ConnectionStrength) -> NetworkEntry {
    NetworkEntry {
        industry: industry.to_string(),
        estimated_contacts: contacts,
        notable_roles: vec!["CTO".to_string()],
        connection_strength: strength,
    }
}

pub(super) fn roster() -> Vec<Member> {
    vec![
        member_with_network(
            "ana",
            &["full-stack-dev", "ml-ai", "product-management"],
            vec![entry("healthcare-medtech", 120, ConnectionStrength::Warm)],
        ),
        member_with_network(
            "ben",
            &["sales", "healthcare-medtech", "fundraising-ir"],
            vec![entry("fintech-banking", 300, ConnectionStrength::Cold)],
        ),
    ]
}

pub(super) fn assessor_reply(idea_quality: f64, team_fit: f64) -> String {
    json!({
        "ideaQualityScore": idea_quality,
        "teamIdeaFitScore": team_fit,
        "timeToFirstCustomer": "3-6 months",
        "narrative": "Credible wedge into clinic operations.",
        "recommendation": "conditional-proceed",
        "overallViabilityScore": 68,
        "reasoning": {
            "ideaQuality": { "problemClarity": 80, "notes": "clear pain" },
            "teamFit": { "skillAlignment": 70, "gaps": ["regulatory"] },
            "timeEstimate": { "realistic": "5 months", "keyRisks": ["HIPAA review"] },
            "requiredSkills": ["full-stack-dev", "healthcare-medtech", "legal-compliance"],
            "missingSkills": ["legal-compliance"]
        }
    })
    .to_string()
}

#[derive(Debug, Clone)]
pub(super) enum Script {
    Reply(String),
    Transport(String),
}

/// Transport double that replays a scripted answer and records call concurrency.
#[derive(Debug, Clone)]
pub(super) struct ScriptedTransport {
    script: Script,
    delay: Duration,
    pub(super) calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    pub(super) peak: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    pub(super) fn new(script: Script) -> Self {
        Self {
            script,
            delay: Duration::ZERO,
            calls: Arc::default(),
            in_flight: Arc::default(),
            peak: Arc::default(),
        }
    }

    pub(super) fn replying(reply: impl Into<String>) -> Self {
        Self::new(Script::Reply(reply.into()))
    }

    pub(super) fn failing(reason: &str) -> Self {
        Self::new(Script::Transport(reason.to_string()))
    }

    pub(super) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssessorTransport for ScriptedTransport {
    fn model_version(&self) -> &str {
        MODEL
    }

    async fn complete(&self, _prompt: &AssessmentPrompt) -> Result<String, AssessorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Transport(reason) => Err(AssessorError::Transport(reason.clone())),
        }
    }
}

/// Repository that refuses every write.
#[derive(Debug, Default)]
pub(super) struct UnavailableRepository;

impl ScoreRepository for UnavailableRepository {
    fn upsert(&self, _idea_id: &IdeaId, _result: ScoreResult) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("disk full".to_string()))
    }

    fn fetch(&self, _idea_id: &IdeaId) -> Result<Option<ScoreResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn build_service(
    transport: ScriptedTransport,
) -> (
    Arc<IdeaScoringService<InMemoryScoreRepository, ScriptedTransport>>,
    InMemoryScoreRepository,
) {
    let repository = InMemoryScoreRepository::default();
    let service = IdeaScoringService::new(
        Arc::new(repository.clone()),
        transport,
        ScoringConfig::default(),
    );
    (Arc::new(service), repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
