use log::{debug, warn};

use crate::{
    connection::{
        connection_config::ConnectionConfig, error::ConnectionError,
        peer_connection::PeerConnection, signal::ConnectionSignal,
    },
    messages::{
        action_invoke::ActionInvoke,
        batch::{frame_action_batches, frame_transform_batches, Batch},
        outgoing::OutgoingQueue,
        transform_update::TransformUpdate,
    },
    transport::{DeliveryQuality, Transport},
    types::PeerId,
    world::{
        dispatch::{dispatch_batch, DispatchStats},
        entity_registry::EntityRegistry,
    },
};

/// What one `flush_outgoing` tick actually sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub transform_batches: usize,
    pub action_batches: usize,
    pub send_failures: usize,
}

/// What one `drain_incoming` tick received and applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainSummary {
    pub payloads: usize,
    pub rejected_batches: usize,
    pub dispatch: DispatchStats,
}

/// One peer's end of the replication link.
///
/// Owns the connection state, the per-tick outgoing queue, and the framing
/// path between them. The host calls `flush_outgoing` and `drain_incoming`
/// once per fixed tick; producers feed `queue_transform` and `queue_action`
/// in between. Single-threaded by design: nothing here is touched from more
/// than one execution context, so there are no locks.
pub struct PeerSession {
    config: ConnectionConfig,
    connection: PeerConnection,
    outgoing: OutgoingQueue,
}

impl PeerSession {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            connection: PeerConnection::new(),
            outgoing: OutgoingQueue::new(),
        }
    }

    pub fn connection(&self) -> &PeerConnection {
        &self.connection
    }

    /// Begins an outbound connection attempt toward `remote`.
    pub fn begin_connect(&mut self, remote: PeerId) -> Result<(), ConnectionError> {
        self.connection.begin_connect(remote)
    }

    /// Feeds one transport lifecycle notification into the state machine.
    pub fn handle_signal(&mut self, signal: ConnectionSignal, transport: &mut dyn Transport) {
        self.connection.handle_signal(signal, transport);
    }

    pub fn queue_transform(&mut self, update: TransformUpdate) {
        self.outgoing.queue_transform(update);
    }

    pub fn queue_action(&mut self, action: ActionInvoke) {
        self.outgoing.queue_action(action);
    }

    /// Drains the tick's accumulated records, frames them, and hands the
    /// batches to the transport: transforms unreliable, actions reliable.
    ///
    /// Outside the Connected state nothing touches the transport; the
    /// queued records are discarded (they describe a tick nobody is
    /// listening to) and `NotConnected` is returned. A transport send
    /// failure is logged and counted, never retried, and does not abort the
    /// rest of the flush.
    pub fn flush_outgoing(
        &mut self,
        transport: &mut dyn Transport,
    ) -> Result<FlushSummary, ConnectionError> {
        if let Err(err) = self.connection.ensure_connected() {
            if !self.outgoing.is_empty() {
                warn!(
                    "Cannot send without an active connection; discarding {} transforms and {} actions",
                    self.outgoing.pending_transforms(),
                    self.outgoing.pending_actions()
                );
                self.outgoing.clear();
            }
            return Err(err);
        }

        let mut summary = FlushSummary::default();

        let transforms = self.outgoing.drain_transforms();
        for payload in frame_transform_batches(&transforms, self.config.max_batch_payload) {
            match transport.send(&payload, DeliveryQuality::UnreliableUnordered) {
                Ok(message_id) => {
                    debug!(
                        "Sent transform batch (id: {}, size: {} bytes)",
                        message_id,
                        payload.len()
                    );
                    summary.transform_batches += 1;
                }
                Err(err) => {
                    warn!("Failed to send transform batch: {}", err);
                    summary.send_failures += 1;
                }
            }
        }

        let actions = self.outgoing.drain_actions();
        for payload in frame_action_batches(&actions, self.config.max_batch_payload) {
            match transport.send(&payload, DeliveryQuality::ReliableOrdered) {
                Ok(message_id) => {
                    debug!(
                        "Sent action batch (id: {}, size: {} bytes)",
                        message_id,
                        payload.len()
                    );
                    summary.action_batches += 1;
                }
                Err(err) => {
                    warn!("Failed to send action batch: {}", err);
                    summary.send_failures += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Pulls up to the configured number of pending payloads, parses each
    /// one, and routes its records to the registry.
    ///
    /// A payload that fails to parse is discarded as a whole and the drain
    /// continues with the next one; a single corrupt batch never poisons
    /// the tick.
    pub fn drain_incoming(
        &mut self,
        transport: &mut dyn Transport,
        registry: &mut dyn EntityRegistry,
    ) -> Result<DrainSummary, ConnectionError> {
        self.connection.ensure_connected()?;

        let mut summary = DrainSummary::default();
        let payloads = transport.receive(self.config.max_incoming_per_tick);
        if !payloads.is_empty() {
            debug!("Received {} messages this tick", payloads.len());
        }
        for payload in payloads {
            summary.payloads += 1;
            match Batch::parse(&payload) {
                Ok(batch) => {
                    summary.dispatch.merge(dispatch_batch(&batch, registry));
                }
                Err(err) => {
                    warn!(
                        "Discarding undecodable batch of {} bytes: {}",
                        payload.len(),
                        err
                    );
                    summary.rejected_batches += 1;
                }
            }
        }
        Ok(summary)
    }
}
