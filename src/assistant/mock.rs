/// Scripted provider for tests and offline use.
///
/// Replays queued outcomes in order and records every request it receives.
/// When the script runs dry it echoes the last user turn back.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::models::{Citation, GenerationRequest, GenerationResponse};
use super::{GenerativeProvider, ProviderError};

enum Scripted {
    Reply(GenerationResponse),
    Fail(fn() -> ProviderError),
}

#[derive(Default)]
pub struct MockProvider {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain text answer.
    #[must_use]
    pub fn with_reply(self, text: &str) -> Self {
        self.push(Scripted::Reply(GenerationResponse {
            principal_text: Some(text.to_string()),
            grounding_citations: Vec::new(),
        }))
    }

    /// Queue an answer carrying grounding citations.
    #[must_use]
    pub fn with_grounded_reply(self, text: &str, citations: Vec<Citation>) -> Self {
        self.push(Scripted::Reply(GenerationResponse {
            principal_text: Some(text.to_string()),
            grounding_citations: citations,
        }))
    }

    /// Queue a raw response, e.g. one with no principal text.
    #[must_use]
    pub fn with_response(self, response: GenerationResponse) -> Self {
        self.push(Scripted::Reply(response))
    }

    /// Queue a failure.
    #[must_use]
    pub fn with_failure(self, make: fn() -> ProviderError) -> Self {
        self.push(Scripted::Fail(make))
    }

    fn push(self, item: Scripted) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(item);
        }
        self
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }

        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        match next {
            Some(Scripted::Reply(resp)) => Ok(resp),
            Some(Scripted::Fail(make)) => Err(make()),
            None => Ok(GenerationResponse {
                principal_text: request.turns.last().map(|t| t.text.clone()),
                grounding_citations: Vec::new(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
