/// Settings for one peer session.
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    /// Upper bound on transport payloads drained per tick. Anything beyond
    /// it stays queued inside the transport and carries over to the next
    /// tick.
    pub max_incoming_per_tick: usize,
    /// Largest framed batch handed to the transport. Records accumulated in
    /// one tick that would exceed this are split across multiple sends.
    pub max_batch_payload: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_incoming_per_tick: 10,
            max_batch_payload: 512 * 1024,
        }
    }
}
