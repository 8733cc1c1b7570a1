use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::prompt::AssessmentPrompt;
use super::response::excerpt;
use super::{AssessorError, AssessorTransport};
use crate::config::AssessorConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages API transport. The instruction block and the team segment are marked as
/// ephemeral cache breakpoints; the idea segment is not.
pub struct AnthropicTransport {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicTransport {
    /// Fails with a configuration error when no API key is set, before any request is built.
    pub fn from_config(config: &AssessorConfig) -> Result<Self, AssessorError> {
        let api_key = config.api_key()?.to_string();
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AssessorError::Transport(format!("unable to build http client: {err}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        })
    }

    fn request<'a>(&'a self, prompt: &'a AssessmentPrompt) -> MessageRequest<'a> {
        MessageRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system: vec![ContentBlock::cached(prompt.instructions)],
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentBlock::cached(&prompt.team_context),
                    ContentBlock::text(&prompt.idea),
                ],
            }],
        }
    }
}

#[async_trait]
impl AssessorTransport for AnthropicTransport {
    fn model_version(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &AssessmentPrompt) -> Result<String, AssessorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.request(prompt))
            .send()
            .await
            .map_err(|err| AssessorError::Transport(transport_reason(&err)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssessorError::Transport(format!(
                "assessor responded with {status}: {}",
                excerpt(&body)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AssessorError::Transport(transport_reason(&err)))?;
        let message: MessageResponse =
            serde_json::from_str(&body).map_err(|err| AssessorError::Malformed {
                reason: format!("unexpected message envelope ({err})"),
                excerpt: excerpt(&body),
            })?;

        message
            .content
            .into_iter()
            .find_map(|block| match block {
                ResponseBlock::Text { text } => Some(text),
                ResponseBlock::Other => None,
            })
            .ok_or_else(|| AssessorError::Malformed {
                reason: "message contained no text block".to_string(),
                excerpt: excerpt(&body),
            })
    }
}

fn transport_reason(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("unable to connect: {err}")
    } else {
        err.to_string()
    }
}

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: Vec<ContentBlock<'a>>,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_control: Option<CacheControl>,
}

impl<'a> ContentBlock<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            kind: "text",
            text,
            cache_control: None,
        }
    }

    fn cached(text: &'a str) -> Self {
        Self {
            cache_control: Some(CacheControl {
                kind: "ephemeral",
            }),
            ..Self::text(text)
        }
    }
}

#[derive(Debug, Serialize)]
struct CacheControl {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}
