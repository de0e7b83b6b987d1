//! Generation state management
//!
//! Owns the idle/submitting/success/error lifecycle of the single
//! outstanding generation request and the channel handles for talking to
//! the worker thread. At most one response is current at a time: every
//! new trigger overwrites the previous outcome.

use std::sync::mpsc::{Receiver, Sender};

use super::prompt::build_prompt;

/// Request messages sent to the generation worker thread
#[derive(Debug)]
pub enum GenRequest {
    /// Generate a plan from the given prompt
    Generate {
        prompt: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the generation worker thread
#[derive(Debug)]
pub enum GenResponse {
    /// The plan was generated successfully
    Completed {
        text: String,
        /// Request ID this result belongs to
        request_id: u64,
    },
    /// An error occurred
    Error(String),
}

/// Lifecycle of the current generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Nothing generated yet
    Idle,
    /// A request is in flight; the trigger is disabled
    Submitting,
    /// The generated plan, as markdown text
    Success(String),
    /// A user-visible error message; prior output is cleared
    Error(String),
}

/// Generation state owned by the UI
pub struct GenerationState {
    pub phase: GenerationPhase,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<GenRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<GenResponse>>,
    /// Current request ID, incremented for each new request
    request_id: u64,
}

impl GenerationState {
    pub fn new() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Attach the channels to the worker thread
    pub fn connect(&mut self, request_tx: Sender<GenRequest>, response_rx: Receiver<GenResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Trigger a generation for the given description
    ///
    /// A no-op when the description is empty or whitespace-only, and while a
    /// request is already in flight. Returns true when a request was sent.
    pub fn start(&mut self, description: &str) -> bool {
        if description.trim().is_empty() {
            return false;
        }
        if matches!(self.phase, GenerationPhase::Submitting) {
            return false;
        }

        let prompt = build_prompt(description);
        let next_id = self.request_id.wrapping_add(1);

        if let Some(tx) = &self.request_tx
            && tx
                .send(GenRequest::Generate {
                    prompt,
                    request_id: next_id,
                })
                .is_ok()
        {
            self.request_id = next_id;
            self.phase = GenerationPhase::Submitting;
            return true;
        }

        false
    }

    /// Drain worker responses, updating the phase
    ///
    /// Completed responses with a stale request ID are discarded.
    pub fn poll(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };

        let mut responses = Vec::new();
        while let Ok(response) = rx.try_recv() {
            responses.push(response);
        }

        for response in responses {
            match response {
                GenResponse::Completed { text, request_id } => {
                    if request_id == self.request_id {
                        self.phase = GenerationPhase::Success(text);
                    } else {
                        log::debug!("discarding stale response for request {}", request_id);
                    }
                }
                GenResponse::Error(message) => {
                    self.phase = GenerationPhase::Error(message);
                }
            }
        }
    }

    /// Whether a request is in flight (the trigger is disabled)
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, GenerationPhase::Submitting)
    }

    /// The current plan text, if the last generation succeeded
    pub fn plan_text(&self) -> Option<&str> {
        match &self.phase {
            GenerationPhase::Success(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
