//! Client Tests
//!
//! End-to-end tests: encode, exchange and decode against a mock controller.

mod common;

use std::io::Write;
use std::thread;
use std::time::Duration;

use common::{assert_peer_closed, closed_port, echo_reply, response_bytes, MockController};
use kepu::{
    exit_code, process, Client, Config, DecodeError, KepuError, Reading, RelayCommand,
    TransportError,
};

// =============================================================================
// Helper Functions
// =============================================================================

/// Controller that accepts the request and never answers in time
fn silent_controller() -> MockController {
    MockController::spawn_with(|_, _| thread::sleep(Duration::from_millis(800)))
}

fn local_config(port: u16) -> Config {
    Config::builder()
        .host("127.0.0.1")
        .port(port)
        .receive_bufsize(1024)
        .read_timeout_ms(2000)
        .write_timeout_ms(2000)
        .build()
}

// =============================================================================
// Orchestration Tests
// =============================================================================

#[test]
fn test_process_echo_controller() {
    let controller = MockController::spawn(echo_reply);

    let reading = process(local_config(controller.port), RelayCommand::new(true, false));

    let reading = reading.expect("expected a reading");
    assert_eq!(reading.relay_status, 0x01);
    assert_eq!(reading.temperature, 20.0);
    assert_eq!(exit_code(Some(&reading)), 0);
    assert_eq!(controller.join(), vec![0x00, 0x01]);
}

#[test]
fn test_process_connection_refused() {
    let reading = process(local_config(closed_port()), RelayCommand::new(true, true));

    assert!(reading.is_none());
    assert_eq!(exit_code(reading.as_ref()), 1);
}

#[test]
fn test_process_bad_reply_yields_nothing() {
    let controller = MockController::spawn(|_| response_bytes(0x7F, 0x02, 0x00, 0.0));

    let reading = process(local_config(controller.port), RelayCommand::new(false, false));

    assert!(reading.is_none());
    assert_eq!(exit_code(reading.as_ref()), 1);
    controller.join();
}

#[test]
fn test_process_truncated_reply_yields_nothing() {
    let controller = MockController::spawn(|_| vec![0x7F, 0x00, 0x01]);

    let reading = process(local_config(controller.port), RelayCommand::new(true, false));

    assert!(reading.is_none());
    controller.join();
}

#[test]
fn test_process_closes_connection_on_decode_failure() {
    let controller = MockController::spawn_with(|stream, _| {
        stream
            .write_all(&response_bytes(0x50, 0x00, 0x01, 20.0))
            .unwrap();
        assert_peer_closed(stream);
    });

    let reading = process(local_config(controller.port), RelayCommand::new(true, false));

    assert!(reading.is_none());
    controller.join();
}

#[test]
fn test_process_silent_controller_times_out() {
    let controller = silent_controller();
    let config = Config::builder()
        .host("127.0.0.1")
        .port(controller.port)
        .read_timeout_ms(100)
        .build();

    let reading = process(config, RelayCommand::new(true, true));

    assert!(reading.is_none());
    assert_eq!(exit_code(reading.as_ref()), 1);
    controller.join();
}

#[test]
fn test_process_invalid_config_yields_nothing() {
    let config = Config::builder().host("127.0.0.1").receive_bufsize(0).build();

    assert!(process(config, RelayCommand::default()).is_none());
}

// =============================================================================
// Typed Client Tests
// =============================================================================

#[test]
fn test_client_switch_relays() {
    let controller = MockController::spawn(echo_reply);
    let client = Client::new(local_config(controller.port)).unwrap();

    let frame = client.switch_relays(RelayCommand::new(true, true)).unwrap();

    assert_eq!(frame.relay_status, 0x03);
    assert_eq!(frame.relay_on(0), Some(true));
    assert_eq!(frame.relay_on(1), Some(true));
    controller.join();
}

#[test]
fn test_client_reports_response_not_ok() {
    let controller = MockController::spawn(|_| response_bytes(0x7F, 0x01, 0x03, 21.5));
    let client = Client::new(local_config(controller.port)).unwrap();

    let result = client.switch_relays(RelayCommand::new(true, true));

    assert!(matches!(
        result,
        Err(KepuError::Decode(DecodeError::ResponseNotOk { code: 0x01 }))
    ));
    controller.join();
}

#[test]
fn test_client_reports_protocol_mismatch() {
    let controller = MockController::spawn(|_| response_bytes(0x50, 0x00, 0x03, 21.5));
    let client = Client::new(local_config(controller.port)).unwrap();

    let result = client.switch_relays(RelayCommand::new(true, true));

    assert!(matches!(
        result,
        Err(KepuError::Decode(DecodeError::ProtocolMismatch { actual: 0x50, .. }))
    ));
    controller.join();
}

#[test]
fn test_client_reports_receive_timeout() {
    let controller = silent_controller();
    let config = Config::builder()
        .host("127.0.0.1")
        .port(controller.port)
        .read_timeout_ms(100)
        .build();
    let client = Client::new(config).unwrap();

    let result = client.switch_relays(RelayCommand::new(false, true));

    assert!(matches!(
        result,
        Err(KepuError::Transport(TransportError::Receive { .. }))
    ));
    controller.join();
}

#[test]
fn test_client_reports_connect_error() {
    let client = Client::new(local_config(closed_port())).unwrap();

    let result = client.switch_relays(RelayCommand::default());

    assert!(matches!(result, Err(KepuError::Transport(_))));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.host, "192.168.101.102");
    assert_eq!(config.port, 29500);
    assert_eq!(config.receive_bufsize, 1024);
    assert!(config.connect_timeout().is_none());
    assert_eq!(config.addr(), "192.168.101.102:29500");
}

#[test]
fn test_client_rejects_invalid_config() {
    let empty_host = Config::builder().host("  ").build();
    assert!(matches!(Client::new(empty_host), Err(KepuError::Config(_))));

    let zero_buffer = Config::builder().receive_bufsize(0).build();
    assert!(matches!(Client::new(zero_buffer), Err(KepuError::Config(_))));
}

// =============================================================================
// Summary Tests
// =============================================================================

#[test]
fn test_reading_summary() {
    let reading = Reading {
        relay_status: 0x03,
        temperature: 21.5,
    };

    assert_eq!(
        reading.summary(),
        "Relays switched 0x3. Current temperature 21.500000"
    );
}

#[test]
fn test_reading_summary_non_finite() {
    let nan = Reading {
        relay_status: 0x00,
        temperature: f32::NAN,
    };
    let hot = Reading {
        relay_status: 0x01,
        temperature: f32::INFINITY,
    };
    let cold = Reading {
        relay_status: 0x02,
        temperature: f32::NEG_INFINITY,
    };

    assert_eq!(nan.summary(), "Relays switched 0x0. Current temperature nan");
    assert_eq!(hot.summary(), "Relays switched 0x1. Current temperature inf");
    assert_eq!(cold.summary(), "Relays switched 0x2. Current temperature -inf");
}
