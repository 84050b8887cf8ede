//! Host resource endpoints

use axum::extract::State;
use axum::Json;
use hoststat_core::{
    timestamp, CpuInfo, MetricsCollector, RamBasis, RamInfo, StorageBasis, StorageInfo,
    SystemInfo,
};
use serde::Serialize;
use tracing::instrument;

use crate::app::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct HardwareInfo {
    pub ram: RamInfo,
    pub cpu: CpuInfo,
    pub storage: StorageInfo,
}

/// `/api/system`
#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub timestamp: String,
    pub system: SystemInfo,
    pub hardware: HardwareInfo,
}

#[derive(Debug, Serialize)]
pub struct RamInfoResponse {
    pub timestamp: String,
    pub ram: RamInfo,
}

#[derive(Debug, Serialize)]
pub struct CpuInfoResponse {
    pub timestamp: String,
    pub cpu: CpuInfo,
}

#[derive(Debug, Serialize)]
pub struct StorageInfoResponse {
    pub timestamp: String,
    pub storage: StorageInfo,
}

/// Run collector calls on the blocking pool so CPU sampling never stalls other requests.
async fn collect<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&dyn MetricsCollector) -> hoststat_core::Result<T> + Send + 'static,
{
    let collector = state.collector.clone();
    let result = tokio::task::spawn_blocking(move || f(collector.as_ref())).await?;
    Ok(result?)
}

/// Combined document; RAM and storage use the host basis.
#[instrument(skip_all)]
pub async fn get_system_info(
    State(state): State<AppState>,
) -> Result<Json<SystemInfoResponse>, ApiError> {
    let mount_point = state.mount_point.clone();
    let (identity, memory, cpu, storage) = collect(&state, move |c| {
        Ok((
            c.collect_system_identity()?,
            c.collect_memory()?,
            c.collect_cpu()?,
            c.collect_storage(&mount_point)?,
        ))
    })
    .await?;

    Ok(Json(SystemInfoResponse {
        timestamp: identity.timestamp(),
        system: identity.report(),
        hardware: HardwareInfo {
            ram: memory.report(RamBasis::Host),
            cpu: cpu.report(),
            storage: storage.report(StorageBasis::Host),
        },
    }))
}

#[instrument(skip_all)]
pub async fn get_ram_info(State(state): State<AppState>) -> Result<Json<RamInfoResponse>, ApiError> {
    let memory = collect(&state, |c| c.collect_memory()).await?;
    Ok(Json(RamInfoResponse {
        timestamp: timestamp(),
        ram: memory.report(RamBasis::Reported),
    }))
}

/// Blocks (off the async workers) for the CPU sampling interval.
#[instrument(skip_all)]
pub async fn get_cpu_info(State(state): State<AppState>) -> Result<Json<CpuInfoResponse>, ApiError> {
    let cpu = collect(&state, |c| c.collect_cpu()).await?;
    Ok(Json(CpuInfoResponse {
        timestamp: timestamp(),
        cpu: cpu.report(),
    }))
}

#[instrument(skip_all)]
pub async fn get_storage_info(
    State(state): State<AppState>,
) -> Result<Json<StorageInfoResponse>, ApiError> {
    let mount_point = state.mount_point.clone();
    let storage = collect(&state, move |c| c.collect_storage(&mount_point)).await?;
    Ok(Json(StorageInfoResponse {
        timestamp: timestamp(),
        storage: storage.report(StorageBasis::Reported),
    }))
}
