//! MCP Server Test Harness
//!
//! Provides a reusable fixture for exercising the WSL screenshot MCP server
//! against a [`MockExecutor`] rooted in a temporary working directory.
//!
//! # Usage
//!
//! ```rust
//! use common::mcp_harness::{McpTestContext, result_text};
//!
//! #[tokio::test]
//! async fn test_capture() {
//!     let ctx = McpTestContext::succeeding_at("screenshots/test.png");
//!     let result = ctx.take_screenshot_named("test.png").await.unwrap();
//!     assert!(result_text(&result).contains("screenshots/test.png"));
//! }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use rmcp::{handler::server::wrapper::Parameters, model::CallToolResult};
use tempfile::TempDir;
use wsl_screenshot_core::{
    capture::{MockExecutor, ScreenshotService, ScriptExecutor},
    config::CaptureConfig,
    model::ExecutionOutcome,
    path::PathResolver,
};
use wsl_screenshot_mcp_server::{TakeScreenshotParams, WslScreenshotMcpServer};

/// Test fixture for MCP server integration tests
///
/// The server's working directory is a fresh temp dir that is removed when
/// the context is dropped. Its `home` subdirectory stands in for `$HOME`.
pub struct McpTestContext {
    /// The MCP server instance
    pub server:   WslScreenshotMcpServer,
    /// Executor behind the server, for inspecting executed scripts
    pub executor: Arc<MockExecutor>,
    workdir:      TempDir,
}

impl McpTestContext {
    /// Context whose executor reports a clean run but writes no file
    pub fn new_with_mock() -> Self {
        Self::new_with_configured_mock(|_| MockExecutor::new())
    }

    /// Context whose executor is built from the working directory
    ///
    /// # Examples
    ///
    /// ```rust
    /// let ctx = McpTestContext::new_with_configured_mock(|workdir| {
    ///     MockExecutor::new().writing_file(workdir.join("screenshots/shot.png"))
    /// });
    /// ```
    pub fn new_with_configured_mock(build: impl FnOnce(&Path) -> MockExecutor) -> Self {
        let workdir = tempfile::tempdir().expect("temp dir should be created");
        let executor = Arc::new(build(workdir.path()));
        let shared: Arc<dyn ScriptExecutor> = executor.clone();
        let service = ScreenshotService::new(
            shared,
            CaptureConfig::default(),
            PathResolver::new(workdir.path()).with_home_dir(Some(workdir.path().join("home"))),
        );
        let server = WslScreenshotMcpServer::new(Arc::new(service));

        Self {
            server,
            executor,
            workdir,
        }
    }

    /// Context whose executor succeeds and writes the image at `relative`
    pub fn succeeding_at(relative: &str) -> Self {
        let relative = relative.to_string();
        Self::new_with_configured_mock(move |workdir| {
            MockExecutor::new()
                .with_outcome(ExecutionOutcome::success("Captured all monitors at 3840x1080"))
                .writing_file(workdir.join(relative))
        })
    }

    /// Context whose executor fails with the given output streams
    pub fn failing_with(stdout: &str, stderr: &str) -> Self {
        let outcome = ExecutionOutcome::failure(stdout, stderr);
        Self::new_with_configured_mock(move |_| MockExecutor::new().with_outcome(outcome))
    }

    // --- Tool invocation helpers ---

    /// Call take_screenshot with full parameters
    pub async fn take_screenshot(
        &self,
        params: TakeScreenshotParams,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.server.take_screenshot(Parameters(params)).await
    }

    /// Call take_screenshot with parameters given as JSON arguments
    pub async fn take_screenshot_json(
        &self,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        let params: TakeScreenshotParams =
            serde_json::from_value(arguments).expect("arguments should deserialize");
        self.take_screenshot(params).await
    }

    /// Convenience: default capture into `filename`
    pub async fn take_screenshot_named(
        &self,
        filename: &str,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.take_screenshot(TakeScreenshotParams {
            filename: filename.to_string(),
            ..TakeScreenshotParams::default()
        })
        .await
    }

    // --- Utility methods ---

    /// Server working directory
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// Absolute path of `relative` inside the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workdir.path().join(relative)
    }

    /// The last script the server ran
    pub fn last_script(&self) -> String {
        self.executor.last_script().expect("a script should have been executed")
    }
}

/// Text of the single content item in a tool result
pub fn result_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content item");
    result.content[0]
        .as_text()
        .map(|text| text.text.clone())
        .expect("content should be text")
}

/// Whether the result is flagged as an error
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
