//! Completion request and response types.

use serde::{Deserialize, Serialize};

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction that frames the conversation.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A provider-agnostic completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Conversation turns, excluding the system prompt.
    pub messages: Vec<Message>,
    /// Optional system instruction, sent first.
    pub system_prompt: Option<String>,
    /// Output length cap.
    pub max_tokens: Option<u32>,
    /// Sampling temperature. Zero means deterministic decoding.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Creates a request with the given messages and zero temperature.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            system_prompt: None,
            max_tokens: None,
            temperature: 0.0,
        }
    }

    /// Sets the system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the output length cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// All messages in wire order, system prompt first.
    pub fn wire_messages(&self) -> Vec<Message> {
        let mut out = Vec::with_capacity(self.messages.len() + 1);
        if let Some(prompt) = &self.system_prompt {
            out.push(Message::system(prompt.clone()));
        }
        out.extend(self.messages.iter().cloned());
        out
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    pub prompt: u32,
    /// Tokens produced by the model.
    pub completion: u32,
}

impl TokenUsage {
    /// Total tokens for the call, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.prompt.saturating_add(self.completion)
    }
}

/// Text returned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Content of the first choice.
    pub content: String,
    /// Token accounting, zero when the provider does not report it.
    pub tokens_used: TokenUsage,
}

impl CompletionResponse {
    /// Creates a response with no usage information.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tokens_used: TokenUsage::default(),
        }
    }
}
