use thiserror::Error;

use crate::types::PeerId;

/// Errors surfaced by the underlying transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport refused or failed to send a payload
    #[error("failed to send a {len}-byte payload. The tick's data is lost; no retry is attempted at this layer")]
    SendFailed {
        len: usize,
    },

    /// An inbound connection could not be accepted
    #[error("rejected the inbound connection from peer {remote}")]
    AcceptRejected {
        remote: PeerId,
    },
}
