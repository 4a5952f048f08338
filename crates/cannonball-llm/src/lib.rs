//! Sends an assembled prompt to an OpenAI-compatible chat endpoint and
//! returns the text to insert.
//!
//! [`complete`] holds the request/response contract. The network sits behind
//! [`ChatTransport`] so the contract can be exercised without one;
//! [`HttpTransport`] is the `reqwest` implementation.

pub mod dispatcher;
pub mod error;
pub mod transport;
pub mod wire;

pub use dispatcher::complete;
pub use error::{CompletionError, TransportError};
pub use transport::{ChatTransport, HttpTransport};
pub use wire::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
