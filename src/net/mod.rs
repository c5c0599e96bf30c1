//! Minimal blocking TCP client/server wrapper.
//!
//! One [`TcpConnection`] owns at most one OS socket and fills either the
//! listening role or the connecting role. Every operation blocks the calling
//! thread until the OS completes it; there is no internal concurrency, no
//! timeout support, and no framing on the wire. A connection must be owned
//! by exactly one thread at a time.

mod connection;
mod error;

pub use connection::{TcpConnection, DEFAULT_BACKLOG};
pub use error::NetError;

use std::sync::OnceLock;
use tracing::debug;

static SUBSYSTEM: OnceLock<()> = OnceLock::new();

/// Initialize the process-wide socket subsystem.
///
/// Required once before any other `net` operation; repeated calls are
/// harmless. On POSIX targets there is nothing to boot, so this only arms
/// the process-wide guard; [`NetError::Init`] is reserved for hosts whose
/// subsystem can actually fail to start.
pub fn init() -> Result<(), NetError> {
    SUBSYSTEM.get_or_init(|| {
        debug!("Socket subsystem initialized");
    });
    Ok(())
}
