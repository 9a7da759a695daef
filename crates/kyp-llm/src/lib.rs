//! # kyp-llm
//!
//! Completion provider abstraction for KYP.
//!
//! This crate provides:
//! - [`CompletionProvider`]: the async trait every backend implements
//! - [`CompletionRequest`] / [`Message`]: request builders
//! - [`OpenAiProvider`]: an OpenAI-compatible `chat/completions` client
//! - [`MockCompletionProvider`]: a scripted provider for tests and offline runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod mock;
pub mod openai;
pub mod provider;
pub mod request;

pub use error::{Error, Result};
pub use mock::{MockCompletionProvider, MockReply};
pub use openai::OpenAiProvider;
pub use provider::CompletionProvider;
pub use request::{CompletionRequest, CompletionResponse, Message, Role, TokenUsage};
