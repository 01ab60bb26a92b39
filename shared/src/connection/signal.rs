use crate::types::PeerId;

/// Asynchronous lifecycle notifications pushed up by the transport layer.
///
/// The session never polls connection status; the transport delivers one of
/// these whenever the link's state changes, and the state machine reacts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionSignal {
    /// A remote peer is asking to connect.
    ConnectRequested {
        remote: PeerId,
    },
    /// The transport reports the link established.
    Established {
        remote: PeerId,
    },
    /// The remote peer closed the link.
    ClosedByPeer,
    /// The transport detected a problem with the link on this side.
    ProblemDetected {
        reason: String,
    },
}
