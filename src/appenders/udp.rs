//! UDP appender for remote log shipping
//!
//! Sends every record as one JSON datagram to a collector such as Logstash.
//! Connecting a UDP socket only resolves the address and fixes the peer, so
//! there is nothing to reconnect: a failed send is reported and the next
//! record tries again.

use crate::core::{Appender, Encoding, LoggerError, Record, RecordEncoder, Result};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

/// Network appender that sends structured records over UDP
///
/// # Example
///
/// ```no_run
/// use rust_logger_fanout::appenders::UdpAppender;
///
/// let appender = UdpAppender::connect("127.0.0.1:5000")
///     .expect("Failed to set up UDP sink");
/// ```
pub struct UdpAppender {
    socket: UdpSocket,
    address: String,
    peer: SocketAddr,
    encoder: RecordEncoder,
}

impl UdpAppender {
    /// Resolve `address` (`host:port`) and connect a UDP socket to it
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::SecondarySinkUnavailable`] naming the step that
    /// failed (resolving, binding or connecting). No retry is attempted.
    pub fn connect(address: &str) -> Result<Self> {
        let peer = address
            .to_socket_addrs()
            .map_err(|e| LoggerError::secondary_sink(address, "resolving address", e))?
            .next()
            .ok_or_else(|| {
                LoggerError::secondary_sink(
                    address,
                    "resolving address",
                    io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing"),
                )
            })?;

        let local: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local)
            .map_err(|e| LoggerError::secondary_sink(address, "binding local socket", e))?;
        socket
            .connect(peer)
            .map_err(|e| LoggerError::secondary_sink(address, "dialing udp", e))?;

        Ok(Self {
            socket,
            address: address.to_string(),
            peer,
            encoder: RecordEncoder::new(Encoding::Json),
        })
    }

    /// The address as configured
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The resolved peer the socket is connected to
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }
}

impl Appender for UdpAppender {
    fn append(&self, record: &Record) -> Result<()> {
        let mut datagram = Vec::with_capacity(256);
        self.encoder.encode(record, &mut datagram)?;

        let sent = self.socket.send(&datagram)?;
        if sent < datagram.len() {
            return Err(LoggerError::other(format!(
                "UDP datagram to {} truncated: {}/{} bytes sent",
                self.address,
                sent,
                datagram.len()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "udp"
    }
}
