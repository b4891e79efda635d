//! Run-to-run state: rolling sample buffers and per-core decay averages,
//! persisted as a single JSON snapshot.

pub mod buffer;
pub mod decay;
pub mod store;

pub use buffer::RollingBuffer;
pub use decay::{CoreTracker, DECAY};
pub use store::{HistorySnapshot, HistoryStore};
