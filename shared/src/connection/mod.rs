pub mod connection_config;
pub mod error;
pub mod peer_connection;
pub mod peer_session;
pub mod signal;
