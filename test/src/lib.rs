pub mod local_transport;
pub mod test_world;

pub use local_transport::LoopbackTransport;
pub use test_world::{TestEntity, TestWorld};
