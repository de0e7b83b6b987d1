//! Generation worker thread
//!
//! Handles generation requests in a background thread so the UI never
//! blocks on the network. Receives requests via channel, makes one HTTP
//! call per request, and sends the outcome back to the main thread.

use std::sync::mpsc::{Receiver, Sender};

use super::client::{GeminiClient, GenError};
use super::state::{GenRequest, GenResponse};
use crate::config::GenerationConfig;

/// Spawn the generation worker thread
///
/// The client is constructed once, up front. When the credential is missing
/// the worker still runs, answering every request with the configuration
/// error instead of touching the network.
pub fn spawn_worker(
    config: &GenerationConfig,
    request_rx: Receiver<GenRequest>,
    response_tx: Sender<GenResponse>,
) {
    let client_result = GeminiClient::from_config(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client_result: Result<GeminiClient, GenError>,
    request_rx: Receiver<GenRequest>,
    response_tx: Sender<GenResponse>,
) {
    let client = match client_result {
        Ok(client) => Some(client),
        Err(e) => {
            log::debug!("generation client not configured: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let GenRequest::Generate { prompt, request_id } = request;

        let response = match &client {
            None => GenResponse::Error(
                "API key not configured. Set GEMINI_API_KEY to continue.".to_string(),
            ),
            Some(client) => match client.generate(&prompt) {
                Ok(text) => GenResponse::Completed { text, request_id },
                Err(e) => GenResponse::Error(e.to_string()),
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }

    log::debug!("generation worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
