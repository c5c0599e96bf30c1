//! Error taxonomy for the connection wrapper.

use thiserror::Error;

/// Errors reported by [`crate::net::TcpConnection`] and [`crate::net::init`].
///
/// Every fallible socket operation maps OS failures onto exactly one of
/// these variants so callers can tell setup failures, state misuse, and
/// transfer failures apart. Peer-initiated orderly close is not an error
/// (it is a zero-length successful receive).
#[derive(Debug, Error)]
pub enum NetError {
    /// The process-wide socket subsystem could not be started.
    #[error("failed to initialize socket subsystem: {0}")]
    Init(std::io::Error),

    /// Socket creation or option setup failed.
    #[error("failed to create socket: {0}")]
    Socket(std::io::Error),

    /// Binding the listening socket failed.
    #[error("failed to bind socket: {0}")]
    Bind(std::io::Error),

    /// Entering the listening state failed.
    #[error("failed to listen on socket: {0}")]
    Listen(std::io::Error),

    /// Accepting a pending peer failed.
    #[error("failed to accept connection: {0}")]
    Accept(std::io::Error),

    /// Host name resolution failed or produced no addresses.
    #[error("failed to resolve address {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    /// Connecting to the remote peer failed.
    #[error("failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        source: std::io::Error,
    },

    /// A data-transfer operation was called without an established peer.
    ///
    /// Listening connections get this too, on purpose: a listener never
    /// holds a peer stream — accepted peers are wrapped as their own
    /// connections — so there is nothing for it to send or receive on.
    #[error("not connected")]
    NotConnected,

    /// An accept was attempted on a connection that is not listening.
    #[error("socket is not in server mode")]
    NotListening,

    /// The OS rejected an outgoing write.
    #[error("failed to send data: {0}")]
    Send(std::io::Error),

    /// The OS rejected an incoming read.
    #[error("failed to receive data: {0}")]
    Receive(std::io::Error),
}
