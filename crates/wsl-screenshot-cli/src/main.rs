//! wsl-screenshot-cli: Command-line tool for WSL screenshot debugging
//!
//! Runs the same capture pipeline as the MCP server without the protocol
//! layer, prints the generated PowerShell script, and lists the windows
//! PowerShell can see.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use wsl_screenshot_core::{
    capture::{PowerShellExecutor, ScreenshotService},
    config::CaptureConfig,
    model::{CaptureRequest, DEFAULT_FILENAME, MonitorSelector},
    path::PathResolver,
    response::describe_failure,
    script::{POWERSHELL_FLAGS, PowerShellInvocation},
    util::detect::detect_wsl,
};

#[derive(Parser)]
#[command(name = "wsl-screenshot-cli")]
#[command(about = "CLI tool for debugging WSL screenshot capture")]
struct Cli {
    /// Margin in pixels added around captured windows
    #[arg(long, global = true)]
    padding: Option<u32>,
    /// Delay in milliseconds after bringing a window to the foreground
    #[arg(long, global = true)]
    settle_ms: Option<u64>,
    /// PowerShell executable to launch
    #[arg(long, global = true)]
    powershell: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a screenshot, exactly as the MCP tool would
    Capture(TargetArgs),
    /// Print the PowerShell script a capture would run, without running it
    RenderScript {
        #[command(flatten)]
        target: TargetArgs,
        /// Print the full powershell.exe command line with the encoded script
        #[arg(long)]
        encoded: bool,
    },
    /// List the visible top-level windows on the Windows host
    ListWindows {
        /// Print JSON instead of a readable list
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Output file name
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    filename: String,
    /// Monitor: all, primary, or a number counted from the left
    #[arg(short, long, default_value = "all")]
    monitor: String,
    /// Case-insensitive window title substring
    #[arg(long)]
    window_title: Option<String>,
    /// Case-insensitive process name substring (.exe optional)
    #[arg(long)]
    process_name: Option<String>,
    /// Destination folder (Windows, /mnt/<drive>, ~/..., or relative path)
    #[arg(long)]
    folder: Option<String>,
}

impl From<TargetArgs> for CaptureRequest {
    fn from(args: TargetArgs) -> Self {
        Self {
            filename:           args.filename,
            monitor:            MonitorSelector::parse(&args.monitor),
            window_title:       args.window_title,
            process_name:       args.process_name,
            destination_folder: args.folder,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wsl_screenshot_cli=info".parse()?)
                .add_directive("wsl_screenshot_core=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service = build_service(&cli)?;

    match cli.command {
        Commands::Capture(target) => capture(&service, target.into()).await?,
        Commands::RenderScript { target, encoded } => render_script(&service, target.into(), encoded)?,
        Commands::ListWindows { json } => list_windows(&service, json).await?,
    }

    Ok(())
}

fn build_service(cli: &Cli) -> Result<ScreenshotService> {
    let mut config = CaptureConfig::from_env();
    if let Some(padding) = cli.padding {
        config.window_padding_px = padding;
    }
    if let Some(settle_ms) = cli.settle_ms {
        config.settle_delay_ms = settle_ms;
    }
    if let Some(program) = &cli.powershell {
        config.powershell_program = program.clone();
    }

    let wsl = detect_wsl();
    if !wsl.is_wsl {
        tracing::warn!("WSL not detected; powershell.exe may not be reachable");
    }

    let base_dir = std::env::current_dir().context("Failed to read working directory")?;
    let resolver = PathResolver::new(base_dir)
        .with_default_dir(config.default_dir.clone())
        .with_distro(wsl.distro)
        .with_home_dir(std::env::var_os("HOME").map(PathBuf::from));

    Ok(ScreenshotService::new(Arc::new(PowerShellExecutor::new()), config, resolver))
}

async fn capture(service: &ScreenshotService, request: CaptureRequest) -> Result<()> {
    println!("Capturing {}...", wsl_screenshot_core::capture::CaptureStrategy::select(&request));

    match service.capture(&request).await {
        Ok(report) => {
            if let Some(line) = &report.status_line {
                println!("{}", line);
            }
            println!("✓ Screenshot saved to {}", report.destination.display_path);
            Ok(())
        }
        Err(e) => anyhow::bail!("{}", describe_failure(&e)),
    }
}

fn render_script(service: &ScreenshotService, request: CaptureRequest, encoded: bool) -> Result<()> {
    let plan = service.plan(&request).map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;

    eprintln!("# strategy: {}", plan.strategy);
    eprintln!("# host path: {}", plan.destination.host_path.display());
    eprintln!("# windows path: {}", plan.destination.foreign_path);

    if encoded {
        let invocation = PowerShellInvocation::new(service.config().powershell_program.as_str(), &plan.script);
        println!(
            "{} {} {}",
            invocation.program(),
            POWERSHELL_FLAGS.join(" "),
            invocation.encoded_script()
        );
    } else {
        print!("{}", plan.script);
    }

    Ok(())
}

async fn list_windows(service: &ScreenshotService, json: bool) -> Result<()> {
    let windows = service
        .list_windows()
        .await
        .map_err(|e| anyhow::anyhow!(describe_failure(&e)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
        return Ok(());
    }

    println!("Found {} windows:\n", windows.len());
    for window in windows {
        println!("  - {}", window);
    }

    Ok(())
}
