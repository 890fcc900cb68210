//! Shared test helpers: an in-process mock controller.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// A controller stand-in serving exactly one connection
pub struct MockController {
    pub port: u16,
    handle: JoinHandle<Vec<u8>>,
}

impl MockController {
    /// Accept one connection, read a 2-byte request, write `reply(request)`
    pub fn spawn<F>(reply: F) -> Self
    where
        F: FnOnce(&[u8]) -> Vec<u8> + Send + 'static,
    {
        Self::spawn_with(move |stream, request| {
            let _ = stream.write_all(&reply(request));
        })
    }

    /// Accept one connection, read a 2-byte request, then hand the stream to `serve`
    pub fn spawn_with<F>(serve: F) -> Self
    where
        F: FnOnce(&mut TcpStream, &[u8]) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 2];
            stream.read_exact(&mut request).unwrap();
            serve(&mut stream, &request);
            request.to_vec()
        });

        Self { port, handle }
    }

    /// Wait for the controller thread and return the request it saw
    pub fn join(self) -> Vec<u8> {
        self.handle.join().unwrap()
    }
}

/// Reply `[0x7F, 0x00, mask_from_request, <20.0f32>]` to any request
pub fn echo_reply(request: &[u8]) -> Vec<u8> {
    response_bytes(0x7F, 0x00, request[1], 20.0)
}

/// Build a raw 7-byte response frame
pub fn response_bytes(id: u8, code: u8, relays: u8, temperature: f32) -> Vec<u8> {
    let mut frame = vec![id, code, relays];
    frame.extend_from_slice(&temperature.to_le_bytes());
    frame
}

/// A port on localhost with nothing listening
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Assert the client side of `stream` has been closed (read hits EOF)
pub fn assert_peer_closed(stream: &mut TcpStream) {
    stream
        .set_read_timeout(Some(std::time::Duration::from_secs(2)))
        .unwrap();
    let mut buf = [0u8; 16];
    match stream.read(&mut buf) {
        Ok(0) => {}
        other => panic!("Expected EOF from closed client, got {:?}", other),
    }
}
