use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use replink_shared::{DeliveryQuality, MessageId, PeerId, Transport, TransportError};

type SharedQueue = Rc<RefCell<VecDeque<Vec<u8>>>>;

/// In-memory transport for wiring two sessions back to back in tests.
///
/// Delivery is deterministic: payloads arrive in send order unless the end
/// is told to drop unreliable traffic, which simulates loss on the
/// unordered/unreliable quality without surfacing a send error (exactly how
/// a real unreliable link loses data).
pub struct LoopbackTransport {
    outgoing: SharedQueue,
    incoming: SharedQueue,
    next_message_id: MessageId,
    pub sent_qualities: Vec<DeliveryQuality>,
    pub sent_sizes: Vec<usize>,
    pub accepted: Vec<PeerId>,
    pub closed_with: Option<String>,
    pub drop_unreliable: bool,
    pub refuse_send: bool,
}

impl LoopbackTransport {
    /// Creates two ends whose send queues feed each other's receive queues.
    pub fn pair() -> (LoopbackTransport, LoopbackTransport) {
        let a_to_b: SharedQueue = Rc::new(RefCell::new(VecDeque::new()));
        let b_to_a: SharedQueue = Rc::new(RefCell::new(VecDeque::new()));
        (
            LoopbackTransport::new(a_to_b.clone(), b_to_a.clone()),
            LoopbackTransport::new(b_to_a, a_to_b),
        )
    }

    fn new(outgoing: SharedQueue, incoming: SharedQueue) -> Self {
        Self {
            outgoing,
            incoming,
            next_message_id: 0,
            sent_qualities: Vec::new(),
            sent_sizes: Vec::new(),
            accepted: Vec::new(),
            closed_with: None,
            drop_unreliable: false,
            refuse_send: false,
        }
    }

    /// Payloads waiting on this end's receive queue.
    pub fn pending(&self) -> usize {
        self.incoming.borrow().len()
    }
}

impl Transport for LoopbackTransport {
    fn send(
        &mut self,
        payload: &[u8],
        quality: DeliveryQuality,
    ) -> Result<MessageId, TransportError> {
        if self.refuse_send {
            return Err(TransportError::SendFailed {
                len: payload.len(),
            });
        }

        self.next_message_id += 1;
        self.sent_qualities.push(quality);
        self.sent_sizes.push(payload.len());

        let lost = self.drop_unreliable && quality == DeliveryQuality::UnreliableUnordered;
        if !lost {
            self.outgoing.borrow_mut().push_back(payload.to_vec());
        }
        Ok(self.next_message_id)
    }

    fn receive(&mut self, max_payloads: usize) -> Vec<Vec<u8>> {
        let mut queue = self.incoming.borrow_mut();
        let count = queue.len().min(max_payloads);
        queue.drain(..count).collect()
    }

    fn accept(&mut self, remote: PeerId) -> Result<(), TransportError> {
        self.accepted.push(remote);
        Ok(())
    }

    fn close(&mut self, reason: &str) {
        self.closed_with = Some(reason.to_string());
    }
}
