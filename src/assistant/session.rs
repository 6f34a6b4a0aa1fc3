//! Assistant round trips and the chat transcript that accumulates them.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::Mutex as TokioMutex;
use tracing::{error, info};

use super::GenerativeProvider;
use super::models::{AssistantReply, GenerationRequest, ProviderTurn, Turn};
use super::prompt::{EMPTY_ANSWER_FALLBACK, FAILURE_MESSAGE, SYSTEM_INSTRUCTION, WELCOME_PREAMBLE};
use crate::config::AssistantConfig;

/// Stateless question answering over a provider.
///
/// Every call is an independent request carrying the full history snapshot
/// it was given; nothing is shared between calls.
#[derive(Clone)]
pub struct Assistant {
    provider: Arc<dyn GenerativeProvider>,
    model: String,
    temperature: f32,
    geographic_grounding: bool,
}

impl Assistant {
    pub fn new(provider: Arc<dyn GenerativeProvider>, config: &AssistantConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            temperature: config.temperature,
            geographic_grounding: config.geographic_grounding,
        }
    }

    /// The request sent for `question` after `history`.
    #[must_use]
    pub fn build_request(&self, question: &str, history: &[Turn]) -> GenerationRequest {
        let mut turns: Vec<ProviderTurn> = history
            .iter()
            .map(|t| ProviderTurn {
                role: t.speaker.provider_role(),
                text: t.text.clone(),
            })
            .collect();
        turns.push(ProviderTurn {
            role: "user",
            text: question.to_string(),
        });

        GenerationRequest {
            model: self.model.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            turns,
            geographic_grounding: self.geographic_grounding,
            temperature: self.temperature,
        }
    }

    /// Ask one question. Returns `None` for blank input without contacting
    /// the provider; otherwise always returns a renderable reply. The welcome
    /// preamble is added when `history` is empty.
    pub async fn ask(&self, question: &str, history: &[Turn]) -> Option<AssistantReply> {
        self.respond(question, history, history.is_empty())
            .await
            .map(|answer| answer.reply)
    }

    async fn respond(&self, question: &str, history: &[Turn], welcome: bool) -> Option<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let request = self.build_request(question, history);
        let answer = match self.provider.generate(&request).await {
            Ok(resp) => {
                let body = resp
                    .principal_text
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| EMPTY_ANSWER_FALLBACK.to_string());
                let text = if welcome {
                    format!("{WELCOME_PREAMBLE}{body}")
                } else {
                    body
                };
                let citations = resp.grounding_citations;
                info!(
                    provider = self.provider.name(),
                    citations = citations.len(),
                    "Assistant answered"
                );
                Answer {
                    reply: AssistantReply {
                        text,
                        citations: (!citations.is_empty()).then_some(citations),
                    },
                    succeeded: true,
                }
            }
            Err(e) => {
                error!(provider = self.provider.name(), "Assistant request failed: {e}");
                Answer {
                    reply: AssistantReply {
                        text: FAILURE_MESSAGE.to_string(),
                        citations: None,
                    },
                    succeeded: false,
                }
            }
        };

        Some(answer)
    }
}

struct Answer {
    reply: AssistantReply,
    succeeded: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("question is empty")]
    EmptyQuestion,

    #[error("a previous question is still awaiting its answer")]
    Busy,
}

/// Clears the in-flight flag when a submission finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A chat with one question outstanding at most.
///
/// The transcript only grows by complete user/assistant pairs, appended
/// after the answer arrives. Dropping a pending `submit` leaves it untouched.
/// The first successful answer of the session carries the welcome preamble.
pub struct ChatSession {
    assistant: Assistant,
    transcript: TokioMutex<Vec<Turn>>,
    in_flight: AtomicBool,
    welcomed: AtomicBool,
}

impl ChatSession {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            assistant,
            transcript: TokioMutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
            welcomed: AtomicBool::new(false),
        }
    }

    /// Submit a question and return the assistant turn that answered it.
    pub async fn submit(&self, question: &str) -> Result<Turn, SubmitError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SubmitError::EmptyQuestion);
        }
        let _guard = InFlight::acquire(&self.in_flight).ok_or(SubmitError::Busy)?;

        let history = self.transcript.lock().await.clone();
        let welcome = !self.welcomed.load(Ordering::Acquire);
        let Answer { reply, succeeded } = self
            .assistant
            .respond(question, &history, welcome)
            .await
            .ok_or(SubmitError::EmptyQuestion)?;
        if welcome && succeeded {
            self.welcomed.store(true, Ordering::Release);
        }
        let answer = Turn::assistant(reply);

        let mut transcript = self.transcript.lock().await;
        transcript.push(Turn::user(question));
        transcript.push(answer.clone());
        Ok(answer)
    }

    /// Snapshot of the transcript so far.
    pub async fn transcript(&self) -> Vec<Turn> {
        self.transcript.lock().await.clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
