use log::{info, warn};

use crate::{
    connection::{error::ConnectionError, signal::ConnectionSignal},
    transport::Transport,
    types::PeerId,
};

/// Lifecycle of the single point-to-point connection.
///
/// `Closed` is terminal: reconnecting takes a fresh `PeerConnection`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Connected,
    Closed,
}

/// Tracks the one active connection and gates all traffic on it.
///
/// Signals arrive from the transport asynchronously; everything else in the
/// layer consults `ensure_connected` before touching the wire.
#[derive(Debug)]
pub struct PeerConnection {
    state: ConnectionState,
    remote: Option<PeerId>,
}

impl PeerConnection {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Idle,
            remote: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn remote(&self) -> Option<PeerId> {
        self.remote
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Begins an outbound connection attempt toward `remote`.
    pub fn begin_connect(&mut self, remote: PeerId) -> Result<(), ConnectionError> {
        match self.state {
            ConnectionState::Idle => {
                self.state = ConnectionState::Connecting;
                self.remote = Some(remote);
                info!("Connecting to peer {}", remote);
                Ok(())
            }
            ConnectionState::Connecting | ConnectionState::Connected => {
                Err(ConnectionError::AlreadyActive)
            }
            ConnectionState::Closed => Err(ConnectionError::ConnectionClosed),
        }
    }

    /// Applies one lifecycle signal, driving accept/close on the transport.
    ///
    /// Accept failures are logged and never retried; the next inbound
    /// signal gets a fresh attempt.
    pub fn handle_signal(&mut self, signal: ConnectionSignal, transport: &mut dyn Transport) {
        match signal {
            ConnectionSignal::ConnectRequested { remote } => {
                self.try_accept(remote, transport);
            }
            ConnectionSignal::Established { remote } => {
                self.try_accept(remote, transport);
            }
            ConnectionSignal::ClosedByPeer => {
                info!("Connection closed by peer");
                self.state = ConnectionState::Closed;
            }
            ConnectionSignal::ProblemDetected { reason } => match self.state {
                ConnectionState::Connecting | ConnectionState::Connected => {
                    warn!("Connection problem detected locally: {}", reason);
                    transport.close(&reason);
                    self.state = ConnectionState::Closed;
                }
                ConnectionState::Idle | ConnectionState::Closed => {}
            },
        }
    }

    fn try_accept(&mut self, remote: PeerId, transport: &mut dyn Transport) {
        match self.state {
            ConnectionState::Connected => {
                // Duplicate signal for the link we already hold.
                info!("Connection already active");
            }
            ConnectionState::Closed => {
                warn!("Ignoring connect signal from {}: connection is closed", remote);
            }
            ConnectionState::Idle | ConnectionState::Connecting => {
                match transport.accept(remote) {
                    Ok(()) => {
                        self.state = ConnectionState::Connected;
                        self.remote = Some(remote);
                        info!("Accepted incoming connection from {}", remote);
                    }
                    Err(err) => {
                        warn!("Failed to accept connection from {}: {}", remote, err);
                    }
                }
            }
        }
    }

    /// Gate for every send/receive path.
    pub fn ensure_connected(&self) -> Result<PeerId, ConnectionError> {
        match (self.state, self.remote) {
            (ConnectionState::Connected, Some(remote)) => Ok(remote),
            _ => Err(ConnectionError::NotConnected { state: self.state }),
        }
    }
}

impl Default for PeerConnection {
    fn default() -> Self {
        Self::new()
    }
}
