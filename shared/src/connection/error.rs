use thiserror::Error;

use crate::connection::peer_connection::ConnectionState;

/// Errors raised by connection gating and lifecycle calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// A send or receive was attempted outside the Connected state
    #[error("cannot send or receive in the {state:?} state: no active connection")]
    NotConnected {
        state: ConnectionState,
    },

    /// An outbound connect was attempted while a connection is already active
    #[error("a connection is already active; this layer is strictly point-to-point")]
    AlreadyActive,

    /// The connection is closed; Closed is terminal
    #[error("the connection is closed. Reconnecting requires a new connection instance")]
    ConnectionClosed,
}
