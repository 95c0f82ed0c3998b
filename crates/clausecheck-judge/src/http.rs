use crate::prompt::build_prompt;
use clausecheck_domain::{Judge, JudgeError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the HTTP judge.
#[derive(Clone, Debug)]
pub struct JudgeConfig {
    /// Full chat-completions URL (e.g. `https://api.openai.com/v1/chat/completions`).
    pub endpoint: String,
    pub model: String,
    /// Bearer token; omitted header when `None` (local providers).
    pub api_key: Option<String>,
    /// Per-call deadline. A timeout surfaces as [`JudgeError::Http`] and is
    /// absorbed per rule like any other provider failure.
    pub timeout: Duration,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// OpenAI-compatible chat-completions judge.
///
/// The client is built once and shared; it carries no per-call mutable state,
/// so one `HttpJudge` can serve concurrent scans. Single attempt per call:
/// retries are a provider-policy concern this adapter does not take on.
pub struct HttpJudge {
    config: JudgeConfig,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

impl HttpJudge {
    pub fn new(config: JudgeConfig) -> Result<Self, JudgeError> {
        if config.endpoint.trim().is_empty() {
            return Err(JudgeError::Unconfigured);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| JudgeError::Http(e.to_string()))?;

        Ok(Self { config, client })
    }
}

impl Judge for HttpJudge {
    fn judge(
        &self,
        document: &str,
        rule_title: &str,
        rule_explanation: &str,
    ) -> Result<String, JudgeError> {
        let prompt = build_prompt(document, rule_title, rule_explanation);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: 0.0,
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(key) = self.config.api_key.as_deref() {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .map_err(|e| JudgeError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(JudgeError::Status {
                code: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| JudgeError::Http(e.to_string()))?;

        let reply = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if reply.trim().is_empty() {
            return Err(JudgeError::EmptyReply);
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_is_unconfigured() {
        let err = HttpJudge::new(JudgeConfig::default()).err().unwrap();
        assert!(matches!(err, JudgeError::Unconfigured));
    }

    #[test]
    fn chat_request_serializes_openai_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            temperature: 0.0,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn chat_response_parses_first_choice() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "pass: ok"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.choices[0].message.content, "pass: ok");
    }
}
