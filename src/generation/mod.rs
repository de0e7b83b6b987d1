//! Marketing plan generation
//!
//! Wraps a single call to the Gemini generative-language API: prompt
//! template, blocking HTTP client, background worker thread, and the
//! idle/submitting/success/error state owned by the UI.

mod client;
mod prompt;
mod state;
mod worker;

pub use state::{GenResponse, GenerationPhase, GenerationState};
pub use worker::spawn_worker;
