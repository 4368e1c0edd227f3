use anyhow::{anyhow, Result};
use colored::*;
use std::io::Write;
use std::net::TcpStream;

/// Opens stream connections to the servo controller. Abstracted so the
/// failure paths can be exercised without a network peer.
pub trait Dialer {
    type Conn: Write;
    fn dial(&mut self, addr: &str) -> std::io::Result<Self::Conn>;
}

pub struct TcpDialer;

impl Dialer for TcpDialer {
    type Conn = TcpStream;

    fn dial(&mut self, addr: &str) -> std::io::Result<TcpStream> {
        TcpStream::connect(addr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    /// Message written in full.
    Sent,
    /// No connection established; the message was not attempted.
    Skipped,
    /// The write failed, the socket was replaced, and the message dropped.
    /// Delivery is at-most-once: the caller must not retry it.
    Recovered,
}

/// Owns the single socket to the controller. Holds at most one open
/// connection at a time; a failed send always drops the dead socket before
/// any reconnect attempt, so no handle is ever leaked half-open.
pub struct ControllerLink<D: Dialer> {
    dialer: D,
    addr: String,
    conn: Option<D::Conn>,
}

impl<D: Dialer> ControllerLink<D> {
    pub fn new(dialer: D, addr: impl Into<String>) -> Self {
        Self {
            dialer,
            addr: addr.into(),
            conn: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Initial connect. Failure here is non-fatal: the loop runs without a
    /// live link and sends are skipped until one is established.
    pub fn connect(&mut self) -> bool {
        match self.dialer.dial(&self.addr) {
            Ok(conn) => {
                println!("{}", format!("Connected to controller at {}", self.addr).green());
                self.conn = Some(conn);
                true
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Could not connect to controller at {}: {}", self.addr, e).red()
                );
                false
            }
        }
    }

    /// Blocking fire-and-forget write of one wire message.
    ///
    /// A failed write closes the socket and makes exactly one reconnect
    /// attempt. If that succeeds the link stays usable but the triggering
    /// message is gone. If it fails the error is terminal: the control loop
    /// cannot continue without the actuator link.
    pub fn send(&mut self, message: &str) -> Result<SendStatus> {
        let Some(conn) = self.conn.as_mut() else {
            return Ok(SendStatus::Skipped);
        };

        match conn.write_all(message.as_bytes()) {
            Ok(()) => Ok(SendStatus::Sent),
            Err(write_err) => {
                // Dead socket must be closed before we try a fresh one
                self.conn = None;
                eprintln!(
                    "{}",
                    format!("Send to {} failed: {}", self.addr, write_err).yellow()
                );

                match self.dialer.dial(&self.addr) {
                    Ok(conn) => {
                        println!("{}", format!("Reconnected to {}", self.addr).green());
                        self.conn = Some(conn);
                        Ok(SendStatus::Recovered)
                    }
                    Err(e) => Err(anyhow!(
                        "lost connection to controller at {} and reconnect failed: {}",
                        self.addr,
                        e
                    )),
                }
            }
        }
    }

    /// Scoped release of the socket on shutdown.
    pub fn close(&mut self) {
        self.conn = None;
    }
}
