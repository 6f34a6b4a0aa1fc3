/// Study assistant backed by an external generative-content provider.
///
/// The provider is reached through the [`GenerativeProvider`] trait so the
/// session logic can run against Gemini in production and a scripted mock in
/// tests.
pub mod gemini;
pub mod mock;
pub mod models;
pub mod prompt;
pub mod session;

use async_trait::async_trait;
use thiserror::Error;

pub use models::{
    AssistantReply, Citation, GenerationRequest, GenerationResponse, ProviderTurn, Speaker, Turn,
};
pub use session::{Assistant, ChatSession, SubmitError};

/// Errors a provider round trip can fail with.
///
/// None of these reach the user directly; the session degrades every one of
/// them to the fixed failure message.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("transport failed: {0}")]
    Transport(String),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::Transport(e.to_string())
        }
    }
}

/// Trait for generative-content backends.
///
/// Implementations must be `Send + Sync` so a single provider can be shared
/// behind `Arc` by every session.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Perform exactly one request. No retries.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}
