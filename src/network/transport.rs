//! Controller Transport
//!
//! Owns one TCP connection for one request/response exchange.

use std::io::{ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::TransportError;
use crate::protocol::hex_bytes;

/// Settings for a single exchange with the controller
///
/// Holds no connection between calls: every `exchange` opens a fresh socket
/// and the socket is dropped (closed) on every exit path.
#[derive(Debug, Clone)]
pub struct Transport {
    host: String,
    port: u16,
    receive_bufsize: usize,
    connect_timeout: Option<Duration>,
    read_timeout_ms: u64,
    write_timeout_ms: u64,
}

impl Transport {
    /// Create a transport for `host:port` with no timeouts
    pub fn new(host: impl Into<String>, port: u16, receive_bufsize: usize) -> Self {
        Self {
            host: host.into(),
            port,
            receive_bufsize,
            connect_timeout: None,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            receive_bufsize: config.receive_bufsize,
            connect_timeout: config.connect_timeout(),
            read_timeout_ms: config.read_timeout_ms,
            write_timeout_ms: config.write_timeout_ms,
        }
    }

    /// Bound the connect phase
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// `host:port` string for logging
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Send `request` and return whatever a single read produced
    ///
    /// 1. Connect (fails with `TransportError::Connect`)
    /// 2. Write the whole request, retrying short writes (`TransportError::Send`)
    /// 3. Read once into a buffer of `receive_bufsize` bytes
    ///
    /// An empty reply (peer closed without answering) is returned as-is;
    /// length validation belongs to the codec.
    pub fn exchange(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let mut stream = self.connect()?;
        tracing::info!("Connected to {}", self.addr());
        tracing::debug!("socket: {:?}", stream);

        tracing::debug!("request: {}", hex_bytes(request));
        stream
            .write_all(request)
            .map_err(|source| TransportError::Send { source })?;
        stream
            .flush()
            .map_err(|source| TransportError::Send { source })?;
        tracing::info!("Sent request: {} bytes", request.len());

        let mut response = vec![0u8; self.receive_bufsize];
        let n = read_once(&mut stream, &mut response)
            .map_err(|source| TransportError::Receive { source })?;
        response.truncate(n);
        tracing::info!("Received response: {} bytes", response.len());
        tracing::debug!("response: {}", hex_bytes(&response));

        Ok(response)
    }

    /// Open the connection and apply socket options
    fn connect(&self) -> Result<TcpStream, TransportError> {
        let addr = self.addr();
        let connect_err = |source: std::io::Error| TransportError::Connect {
            addr: addr.clone(),
            source,
        };

        let stream = match self.connect_timeout {
            None => TcpStream::connect((self.host.as_str(), self.port)).map_err(connect_err)?,
            Some(timeout) => {
                connect_with_timeout(&self.host, self.port, timeout).map_err(connect_err)?
            }
        };

        // Tiny frames, send immediately
        stream.set_nodelay(true).map_err(connect_err)?;

        if self.read_timeout_ms > 0 {
            stream
                .set_read_timeout(Some(Duration::from_millis(self.read_timeout_ms)))
                .map_err(connect_err)?;
        }
        if self.write_timeout_ms > 0 {
            stream
                .set_write_timeout(Some(Duration::from_millis(self.write_timeout_ms)))
                .map_err(connect_err)?;
        }

        Ok(stream)
    }
}

/// Exchange one request with the controller at `host:port`
///
/// Convenience wrapper building a fresh `Transport` for the call.
pub fn exchange(
    host: &str,
    port: u16,
    request: &[u8],
    receive_bufsize: usize,
    connect_timeout: Option<Duration>,
) -> Result<Vec<u8>, TransportError> {
    Transport::new(host, port, receive_bufsize)
        .with_connect_timeout(connect_timeout)
        .exchange(request)
}

/// Try every resolved address until one accepts within `timeout`
fn connect_with_timeout(host: &str, port: u16, timeout: Duration) -> std::io::Result<TcpStream> {
    let mut last_err = None;

    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        std::io::Error::new(
            ErrorKind::NotFound,
            format!("{}:{} resolved to no addresses", host, port),
        )
    }))
}

/// A single read; only an interrupted syscall is retried
fn read_once(stream: &mut TcpStream, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match stream.read(buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}
