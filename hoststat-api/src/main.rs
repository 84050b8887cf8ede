mod app;

use app::{app_router, AppState, API_ROUTES};
use hoststat_core::{HostCollector, DEFAULT_CPU_SAMPLE_INTERVAL};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PORT: u16 = 5005;
const STORAGE_MOUNT_POINT: &str = "/";

/// Fixed at build time; the only runtime knob is `RUST_LOG`.
#[derive(Debug, Clone)]
struct ApiConfig {
    bind: SocketAddr,
    mount_point: PathBuf,
    cpu_sample_interval: Duration,
}

impl ApiConfig {
    fn fixed() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
            mount_point: PathBuf::from(STORAGE_MOUNT_POINT),
            cpu_sample_interval: DEFAULT_CPU_SAMPLE_INTERVAL,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::fixed();
    info!("starting system info API on {}", config.bind);
    for (path, about) in API_ROUTES {
        info!("  http://localhost:{}{} - {}", config.bind.port(), path, about);
    }

    let collector = Arc::new(HostCollector::new(config.cpu_sample_interval));
    let state = AppState::new(collector, config.mount_point.clone());

    let app = app_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
