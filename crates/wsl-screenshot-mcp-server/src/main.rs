//! wsl-screenshot-mcp: Windows screenshots for coding agents running in WSL

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use wsl_screenshot_core::{
    capture::{PowerShellExecutor, ScreenshotService},
    config::CaptureConfig,
    path::PathResolver,
    util::detect::detect_wsl,
};
use wsl_screenshot_mcp_server::WslScreenshotMcpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so logs go to stderr
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wsl_screenshot_mcp=info,wsl_screenshot_core=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .init();

    info!("wsl-screenshot-mcp server starting...");

    let wsl = detect_wsl();
    if wsl.is_wsl {
        info!("Running under WSL (distro: {})", wsl.distro.as_deref().unwrap_or("unknown"));
    } else {
        warn!("WSL not detected; powershell.exe may not be reachable");
    }

    let config = CaptureConfig::from_env();
    info!(
        powershell = %config.powershell_program,
        padding = config.window_padding_px,
        settle_ms = config.settle_delay_ms,
        "Capture configuration loaded"
    );

    let base_dir = std::env::current_dir().context("Failed to read working directory")?;
    let resolver = PathResolver::new(base_dir)
        .with_default_dir(config.default_dir.clone())
        .with_distro(wsl.distro)
        .with_home_dir(std::env::var_os("HOME").map(PathBuf::from));

    let service = ScreenshotService::new(Arc::new(PowerShellExecutor::new()), config, resolver);
    let server = WslScreenshotMcpServer::new(Arc::new(service));

    let service = server.serve(stdio()).await?;
    info!("wsl-screenshot-mcp server initialized, waiting for MCP requests...");

    service.waiting().await?;

    info!("wsl-screenshot-mcp server shutting down");
    Ok(())
}
