//! Core library for host metrics: OS readings, snapshot types, and the JSON reports built from them.

mod collector;
mod error;
mod models;
mod report;
pub mod units;

pub use collector::{HostCollector, MetricsCollector, DEFAULT_CPU_SAMPLE_INTERVAL};
pub use error::{CollectionError, Result};
pub use models::{
    timestamp, CpuSnapshot, MemorySnapshot, RamBasis, StorageBasis, StorageSnapshot,
    SystemSnapshot,
};
pub use report::{CpuInfo, RamInfo, StorageInfo, SystemInfo};
