use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Role name in the provider's vocabulary.
    #[must_use]
    pub fn provider_role(self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "model",
        }
    }
}

/// A grounding citation: a real-world place or page backing an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

/// One message in the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
}

impl Turn {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            citations: None,
        }
    }

    #[must_use]
    pub fn assistant(reply: AssistantReply) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: reply.text,
            citations: reply.citations,
        }
    }
}

/// What the assistant hands back for one question.
///
/// `citations` is `None` when the provider grounded nothing; it is never
/// `Some(vec![])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderTurn {
    pub role: &'static str,
    pub text: String,
}

/// Provider-neutral request for one round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub turns: Vec<ProviderTurn>,
    /// Whether the provider may consult its map-grounding tool.
    pub geographic_grounding: bool,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationResponse {
    pub principal_text: Option<String>,
    pub grounding_citations: Vec<Citation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_roles() {
        assert_eq!(Speaker::User.provider_role(), "user");
        assert_eq!(Speaker::Assistant.provider_role(), "model");
    }

    #[test]
    fn test_turn_without_citations_omits_field() {
        let turn = Turn::user("ما هي العدالة المناخية؟");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["speaker"], "user");
        assert!(json.get("citations").is_none());
    }
}
