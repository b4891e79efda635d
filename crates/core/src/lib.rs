pub mod error;
pub mod state;

pub use error::{Result, SysmonError};
pub use state::{CpuReading, GpuReading, MemoryReading, StorageEntry, Telemetry};
