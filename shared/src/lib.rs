//! # Replink Shared
//! Peer-to-peer state synchronization for real-time entity replication:
//! per-tick batching, a self-describing binary wire format, and
//! identifier-keyed dispatch, multiplexed over one logical connection to a
//! single remote peer.
//!
//! Transform snapshots travel unordered/unreliable; action invocations
//! travel ordered/reliable. The host drives the layer with one
//! [`PeerSession::flush_outgoing`] and one [`PeerSession::drain_incoming`]
//! call per fixed tick.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use replink_serde::{ByteReader, ByteWriter, SerdeErr};

mod connection;
mod messages;
mod transport;
mod types;
mod world;

pub use connection::{
    connection_config::ConnectionConfig,
    error::ConnectionError,
    peer_connection::{ConnectionState, PeerConnection},
    peer_session::{DrainSummary, FlushSummary, PeerSession},
    signal::ConnectionSignal,
};
pub use messages::{
    action_invoke::{decode_action_array, ActionInvoke},
    batch::{
        frame_action_batch, frame_action_batches, frame_transform_batch,
        frame_transform_batches, Batch, BatchFamily,
    },
    error::{BatchError, RecordError},
    outgoing::OutgoingQueue,
    transform_update::{TransformKind, TransformUpdate},
};
pub use transport::{error::TransportError, DeliveryQuality, Transport};
pub use types::{ActionIndex, EntityId, MessageId, PeerId, Position, Rotation};
pub use world::{
    dispatch::{dispatch_actions, dispatch_batch, dispatch_transforms, DispatchStats},
    entity_registry::{EntityRegistry, LocalRegistry, ReplicatedEntity},
};
