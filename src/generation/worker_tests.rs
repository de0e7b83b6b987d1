//! Tests for the generation worker thread

use std::sync::mpsc;

use super::*;

#[test]
fn test_worker_without_client_reports_configuration_error() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    // Spawn worker with no client (simulating a missing credential)
    std::thread::spawn(move || {
        worker_loop(
            Err(GenError::NotConfigured("test".to_string())),
            request_rx,
            response_tx,
        );
    });

    request_tx
        .send(GenRequest::Generate {
            prompt: "test".to_string(),
            request_id: 1,
        })
        .unwrap();

    let response = response_rx.recv().unwrap();
    match response {
        GenResponse::Error(message) => {
            assert!(message.contains("API key not configured"));
        }
        _ => panic!("expected error response"),
    }
}

#[test]
fn test_worker_answers_every_request_without_client() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(
            Err(GenError::NotConfigured("test".to_string())),
            request_rx,
            response_tx,
        );
    });

    // The view stays usable for subsequent attempts
    for request_id in 1..=3 {
        request_tx
            .send(GenRequest::Generate {
                prompt: "test".to_string(),
                request_id,
            })
            .unwrap();
        let response = response_rx.recv().unwrap();
        assert!(matches!(response, GenResponse::Error(_)));
    }
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = mpsc::channel::<GenRequest>();
    let (response_tx, _response_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        worker_loop(
            Err(GenError::NotConfigured("test".to_string())),
            request_rx,
            response_tx,
        );
    });

    // Drop the sender to close the channel
    drop(request_tx);

    handle.join().expect("worker thread should exit cleanly");
}

#[test]
fn test_response_send_fails_after_main_thread_disconnects() {
    let (tx, rx) = mpsc::channel();

    drop(rx);

    let result = tx.send(GenResponse::Completed {
        text: "plan".to_string(),
        request_id: 1,
    });

    assert!(result.is_err(), "send should fail when receiver is dropped");
}
