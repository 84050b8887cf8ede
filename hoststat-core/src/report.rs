//! JSON shapes served to dashboards. Field names are a public contract.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub architecture: String,
    pub machine: String,
    pub processor: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RamInfo {
    pub total_gb: f64,
    pub used_gb: f64,
    pub available_gb: f64,
    pub usage_percent: f64,
}

/// Missing values serialize as `null` rather than being skipped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CpuInfo {
    pub physical_cores: Option<usize>,
    pub total_cores: usize,
    pub usage_percent: f64,
    pub current_frequency_mhz: Option<f64>,
    pub max_frequency_mhz: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StorageInfo {
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub usage_percent: f64,
}
