//! Tests for generation state transitions

use std::sync::mpsc;

use super::*;

/// State with test channels attached; returns the worker-side ends
fn connected_state() -> (
    GenerationState,
    mpsc::Receiver<GenRequest>,
    mpsc::Sender<GenResponse>,
) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    let mut state = GenerationState::new();
    state.connect(request_tx, response_rx);

    (state, request_rx, response_tx)
}

#[test]
fn test_initial_phase_is_idle() {
    let state = GenerationState::new();

    assert_eq!(state.phase, GenerationPhase::Idle);
    assert!(!state.is_submitting());
    assert_eq!(state.plan_text(), None);
}

#[test]
fn test_empty_description_is_noop() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(!state.start(""));
    assert!(!state.start("   \n\t  "));

    assert_eq!(state.phase, GenerationPhase::Idle);
    assert!(request_rx.try_recv().is_err(), "no request should be sent");
}

#[test]
fn test_start_sends_request_and_submits() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(state.start("a coffee shop in Lisbon"));
    assert!(state.is_submitting());

    let request = request_rx.try_recv().expect("request should be sent");
    let GenRequest::Generate { prompt, request_id } = request;
    assert!(prompt.contains("a coffee shop in Lisbon"));
    assert_eq!(request_id, 1);
}

#[test]
fn test_trigger_disabled_while_submitting() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(state.start("a coffee shop"));
    assert!(!state.start("a coffee shop"), "second trigger should be a no-op");

    // Exactly one request crossed the channel
    assert!(request_rx.try_recv().is_ok());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_completed_response_sets_success() {
    let (mut state, _request_rx, response_tx) = connected_state();

    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Completed {
            text: "# Plan".to_string(),
            request_id: 1,
        })
        .unwrap();

    state.poll();

    assert_eq!(state.phase, GenerationPhase::Success("# Plan".to_string()));
    assert_eq!(state.plan_text(), Some("# Plan"));
    assert!(!state.is_submitting());
}

#[test]
fn test_stale_completed_response_is_discarded() {
    let (mut state, _request_rx, response_tx) = connected_state();

    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Completed {
            text: "stale".to_string(),
            request_id: 99,
        })
        .unwrap();

    state.poll();

    assert!(state.is_submitting(), "stale response should not resolve the request");
}

#[test]
fn test_error_response_clears_prior_output() {
    let (mut state, _request_rx, response_tx) = connected_state();

    // First generation succeeds
    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Completed {
            text: "# Plan".to_string(),
            request_id: 1,
        })
        .unwrap();
    state.poll();
    assert!(state.plan_text().is_some());

    // Second generation fails
    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Error("Network error: boom".to_string()))
        .unwrap();
    state.poll();

    assert_eq!(
        state.phase,
        GenerationPhase::Error("Network error: boom".to_string())
    );
    assert_eq!(state.plan_text(), None, "prior output should be cleared");
}

#[test]
fn test_trigger_reenabled_after_error() {
    let (mut state, request_rx, response_tx) = connected_state();

    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Error("Network error: boom".to_string()))
        .unwrap();
    state.poll();

    assert!(state.start("a coffee shop"), "trigger should work again");
    // Two requests total
    assert!(request_rx.try_recv().is_ok());
    assert!(request_rx.try_recv().is_ok());
}

#[test]
fn test_retrigger_from_success_overwrites() {
    let (mut state, _request_rx, response_tx) = connected_state();

    state.start("a coffee shop");
    response_tx
        .send(GenResponse::Completed {
            text: "# Plan".to_string(),
            request_id: 1,
        })
        .unwrap();
    state.poll();

    assert!(state.start("a tea shop"));
    assert!(state.is_submitting(), "new trigger should overwrite the old result");
}

#[test]
fn test_start_without_channels_is_noop() {
    let mut state = GenerationState::new();

    assert!(!state.start("a coffee shop"));
    assert_eq!(state.phase, GenerationPhase::Idle);
}
