//! End-to-end handling of one screenshot request
//!
//! [`ScreenshotService`] wires the pipeline together:
//!
//! 1. resolve the destination into host, foreign and display paths
//! 2. pick the capture strategy
//! 3. build and encode the PowerShell script
//! 4. create the destination directory
//! 5. run the script through the [`ScriptExecutor`]
//! 6. classify the output and confirm the image exists
//!
//! The service holds no per-request state, so one instance can serve
//! concurrent requests behind an `Arc`.

use std::sync::Arc;

use tracing::{error, info};

use super::{CaptureStrategy, ScriptExecutor, classify_outcome, parse_window_list, verify_output};
use crate::{
    config::CaptureConfig,
    error::ScreenshotResult,
    model::{CaptureRequest, CaptureResult, ResolvedDestination, WindowInfo},
    path::{PathResolver, ensure_parent_dir},
    script::{PowerShellInvocation, build_capture_script, build_list_windows_script},
};

/// Everything decided about a request before anything runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePlan {
    pub destination: ResolvedDestination,
    pub strategy:    CaptureStrategy,
    pub script:      String,
}

/// A completed capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub destination: ResolvedDestination,
    pub strategy:    CaptureStrategy,
    /// Last line the script printed, if any
    pub status_line: Option<String>,
}

/// Screenshot pipeline over a pluggable executor
pub struct ScreenshotService {
    executor: Arc<dyn ScriptExecutor>,
    config:   CaptureConfig,
    resolver: PathResolver,
}

impl ScreenshotService {
    /// Creates a service
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use wsl_screenshot_core::{
    ///     capture::{ScreenshotService, mock::MockExecutor},
    ///     config::CaptureConfig,
    ///     path::PathResolver,
    /// };
    ///
    /// let service = ScreenshotService::new(
    ///     Arc::new(MockExecutor::new()),
    ///     CaptureConfig::default(),
    ///     PathResolver::new("/home/me/project"),
    /// );
    /// assert_eq!(service.config().window_padding_px, 10);
    /// ```
    pub fn new(executor: Arc<dyn ScriptExecutor>, config: CaptureConfig, resolver: PathResolver) -> Self {
        Self {
            executor,
            config,
            resolver,
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Resolves, selects and renders without touching the host
    pub fn plan(&self, request: &CaptureRequest) -> ScreenshotResult<CapturePlan> {
        let destination = self
            .resolver
            .resolve(request.destination_folder.as_deref(), &request.filename)?;
        let strategy = CaptureStrategy::select(request);
        let script = build_capture_script(&strategy, &destination.foreign_path, &self.config);

        Ok(CapturePlan {
            destination,
            strategy,
            script,
        })
    }

    /// Runs the full pipeline for one request
    ///
    /// # Errors
    ///
    /// Any [`ScreenshotError`](crate::error::ScreenshotError): invalid filename, directory creation, launch
    /// failure, a failure reported by the script, or a missing output file.
    pub async fn capture(&self, request: &CaptureRequest) -> ScreenshotResult<CaptureReport> {
        let CapturePlan {
            destination,
            strategy,
            script,
        } = self.plan(request)?;

        info!(
            strategy = strategy.kind(),
            target = %strategy,
            path = %destination.display_path,
            "Taking screenshot"
        );

        ensure_parent_dir(&destination).await?;

        let invocation = PowerShellInvocation::new(self.config.powershell_program.as_str(), &script);
        let outcome = self.executor.execute(&invocation).await?;

        let status_line = classify_outcome(&outcome)?;
        verify_output(&destination.host_path).await?;

        if let Some(line) = &status_line {
            info!("{}", line);
        }

        Ok(CaptureReport {
            destination,
            strategy,
            status_line,
        })
    }

    /// Runs the pipeline and folds the outcome into a [`CaptureResult`]
    ///
    /// Never fails: every error becomes a failed result with its message.
    pub async fn take_screenshot(&self, request: &CaptureRequest) -> CaptureResult {
        match self.capture(request).await {
            Ok(report) => CaptureResult::saved(&report.destination.display_path),
            Err(e) => {
                error!("Screenshot failed: {}", e);
                CaptureResult::failed(&e)
            }
        }
    }

    /// Lists visible top-level windows on the Windows host
    pub async fn list_windows(&self) -> ScreenshotResult<Vec<WindowInfo>> {
        let invocation =
            PowerShellInvocation::new(self.config.powershell_program.as_str(), &build_list_windows_script());
        let outcome = self.executor.execute(&invocation).await?;

        classify_outcome(&outcome)?;
        let windows = parse_window_list(&outcome.stdout)?;
        info!("Found {} windows", windows.len());
        Ok(windows)
    }
}

impl std::fmt::Debug for ScreenshotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenshotService")
            .field("config", &self.config)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
