pub mod error;

use crate::types::{MessageId, PeerId};

use self::error::TransportError;

/// Delivery guarantee requested for one outgoing payload.
///
/// Transform batches ride `UnreliableUnordered`: a lost snapshot is
/// superseded by the next tick anyway. Action batches ride
/// `ReliableOrdered`: discrete events must not be silently dropped or
/// reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeliveryQuality {
    UnreliableUnordered,
    ReliableOrdered,
}

/// The connection primitive this layer rides on.
///
/// Implementations wrap whatever actually moves bytes: a relay socket in
/// production, a loopback pair in tests. All methods are synchronous and
/// non-blocking; `receive` returns at most `max_payloads` pending messages
/// and leaves the rest queued for the next tick.
pub trait Transport {
    /// Hands one framed payload to the transport with the requested
    /// delivery quality. Exactly one attempt is made; reliability beyond
    /// that is the transport's own guarantee.
    fn send(
        &mut self,
        payload: &[u8],
        quality: DeliveryQuality,
    ) -> Result<MessageId, TransportError>;

    /// Drains up to `max_payloads` received messages.
    fn receive(&mut self, max_payloads: usize) -> Vec<Vec<u8>>;

    /// Accepts an inbound connection attempt from `remote`.
    fn accept(&mut self, remote: PeerId) -> Result<(), TransportError>;

    /// Closes the underlying connection, reporting `reason` to the peer.
    fn close(&mut self, reason: &str);
}
