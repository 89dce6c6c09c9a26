//! MCP Server Integration Tests
//!
//! Drives the `take_screenshot` tool end-to-end against a mock PowerShell
//! executor and checks both the response text and the script that would
//! have run on the Windows host.
//!
//! # Running Tests
//!
//! ```bash
//! # Headless tests
//! cargo test -p wsl-screenshot-mcp-server --test mcp_integration_tests
//!
//! # Live tests (requires WSL with Windows interop and a desktop session)
//! cargo test -p wsl-screenshot-mcp-server --test mcp_integration_tests -- --ignored --nocapture
//! ```

mod common;

use std::sync::Arc;

use common::mcp_harness::{McpTestContext, is_error, result_text};
use serde_json::json;
use wsl_screenshot_core::{
    capture::{PowerShellExecutor, ScreenshotService},
    config::CaptureConfig,
    path::PathResolver,
    util::detect::detect_wsl,
};
use wsl_screenshot_mcp_server::{TakeScreenshotParams, WslScreenshotMcpServer};

// ============================================================================
// Headless Tests (MockExecutor) - Always Run
// ============================================================================

/// Default request captures all monitors into ./screenshots
#[tokio::test]
async fn test_default_request_saves_under_screenshots() {
    let ctx = McpTestContext::succeeding_at("screenshots/test.png");

    let result = ctx
        .take_screenshot_json(json!({ "filename": "test.png" }))
        .await
        .expect("tool call should not be a protocol error");

    assert!(!is_error(&result), "should not be an error");
    assert_eq!(
        result_text(&result),
        "Screenshot saved successfully to: screenshots/test.png"
    );
    assert!(ctx.path("screenshots").is_dir());

    let script = ctx.last_script();
    assert!(script.contains("VirtualScreen"), "should capture all monitors");
    assert!(script.contains("test.png"));
}

/// Unknown window title surfaces the enumerated window list
#[tokio::test]
async fn test_unknown_window_lists_available_windows() {
    let ctx = McpTestContext::failing_with(
        "Available windows:\n  - Visual Studio Code (Code)\n  - Untitled - Notepad (notepad)\n",
        "No window found with title containing: NoSuchApp\nAt line:98 char:5\n+     throw ('No window found with title containing: {0}' -f $searchTerm)\n",
    );

    let result = ctx
        .take_screenshot_json(json!({ "windowTitle": "NoSuchApp" }))
        .await
        .expect("tool call should not be a protocol error");

    assert!(is_error(&result), "should be flagged as error");
    let text = result_text(&result);
    assert!(text.starts_with("Failed to take screenshot: "));
    assert!(text.contains("No window found with title containing: NoSuchApp"));
    assert!(text.contains("Visual Studio Code (Code)"));
    assert!(ctx.last_script().contains("$searchTerm = 'NoSuchApp'"));
}

/// Out-of-range monitor reports the valid range
#[tokio::test]
async fn test_monitor_out_of_range() {
    let ctx = McpTestContext::failing_with(
        "",
        "Monitor 5 not found. Valid range: 1 to 2\n+ throw ('Monitor {0} not found. Valid range: 1 to {1}' -f $monitorIndex, $screens.Count)\n",
    );

    let result = ctx
        .take_screenshot_json(json!({ "monitor": 5 }))
        .await
        .expect("tool call should not be a protocol error");

    assert!(is_error(&result));
    assert!(result_text(&result).contains("Valid range: 1 to 2"));
    assert!(ctx.last_script().contains("$monitorSelector = '5'"));
}

/// A fractional monitor number reaches the script instead of failing to parse
#[tokio::test]
async fn test_fractional_monitor_is_rejected_by_script() {
    let ctx = McpTestContext::failing_with(
        "",
        "Invalid monitor selector '2.5'. Use 'all', 'primary', or a monitor number from 1 to 2\n+ throw (\"Invalid monitor selector '{0}'...\" -f $monitorSelector, $screens.Count)\n",
    );

    let result = ctx
        .take_screenshot_json(json!({ "monitor": 2.5 }))
        .await
        .expect("tool call should not be a protocol error");

    assert!(is_error(&result));
    assert!(result_text(&result).contains("Invalid monitor selector '2.5'"));
    assert!(ctx.last_script().contains("$monitorSelector = '2.5'"));
}

/// Benign ErrorId-tagged diagnostics do not fail a capture
#[tokio::test]
async fn test_error_id_noise_is_ignored() {
    let ctx = McpTestContext::new_with_configured_mock(|workdir| {
        wsl_screenshot_core::capture::MockExecutor::new()
            .with_outcome(wsl_screenshot_core::model::ExecutionOutcome {
                exited_abnormally: false,
                stdout:            "Captured primary monitor at 1920x1080".to_string(),
                stderr:            "Verbose Error stream\n+ FullyQualifiedErrorId : Benign".to_string(),
            })
            .writing_file(workdir.join("screenshots/screenshot.png"))
    });

    let result = ctx
        .take_screenshot_json(json!({ "monitor": "primary" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{}", result_text(&result));
    assert!(ctx.last_script().contains("PrimaryScreen"));
}

/// A clean run that leaves no file is still a failure
#[tokio::test]
async fn test_missing_output_file_is_error() {
    let ctx = McpTestContext::new_with_mock();

    let result = ctx.take_screenshot(TakeScreenshotParams::default()).await.unwrap();

    assert!(is_error(&result));
    assert!(result_text(&result).contains("Screenshot file was not created"));
}

/// Window title wins over process name
#[tokio::test]
async fn test_window_title_precedence() {
    let ctx = McpTestContext::succeeding_at("screenshots/screenshot.png");

    let result = ctx
        .take_screenshot_json(json!({ "windowTitle": "Chrome", "processName": "notepad.exe" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{}", result_text(&result));
    let script = ctx.last_script();
    assert!(script.contains("$searchTerm = 'Chrome'"));
    assert!(!script.contains("notepad"));
}

/// Process name strategy strips the .exe suffix
#[tokio::test]
async fn test_process_name_strategy() {
    let ctx = McpTestContext::succeeding_at("screenshots/screenshot.png");

    ctx.take_screenshot_json(json!({ "processName": "Notepad.EXE" }))
        .await
        .unwrap();

    let script = ctx.last_script();
    assert!(script.contains("$searchTerm = 'Notepad'"));
    assert!(script.contains("$_.ProcessName.IndexOf($searchTerm"));
}

/// Relative folders resolve against the working directory and display as given
#[tokio::test]
async fn test_relative_folder() {
    let ctx = McpTestContext::succeeding_at("out/shots/desk.png");

    let result = ctx
        .take_screenshot_json(json!({ "filename": "desk.png", "folder": "out/shots" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{}", result_text(&result));
    assert_eq!(
        result_text(&result),
        "Screenshot saved successfully to: out/shots/desk.png"
    );
    assert!(ctx.path("out/shots/desk.png").exists());
}

/// Home-relative folders expand against $HOME and display as given
#[tokio::test]
async fn test_home_relative_folder() {
    let ctx = McpTestContext::succeeding_at("home/project/shots/a.png");

    let result = ctx
        .take_screenshot_json(json!({ "filename": "a.png", "folder": "~/project/shots" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{}", result_text(&result));
    assert_eq!(
        result_text(&result),
        "Screenshot saved successfully to: ~/project/shots/a.png"
    );
    assert!(ctx.path("home/project/shots/a.png").exists());
    assert!(!ctx.path("~").exists());
}

/// Path separators in the filename are rejected before anything runs
#[tokio::test]
async fn test_filename_with_separator_is_rejected() {
    let ctx = McpTestContext::new_with_mock();

    let result = ctx
        .take_screenshot_json(json!({ "filename": "../../etc/evil.png" }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(result_text(&result).contains("filename"));
    assert_eq!(ctx.executor.execution_count(), 0);
}

/// Quotes in caller values cannot break out of the script literal
#[tokio::test]
async fn test_hostile_window_title_is_quoted() {
    let ctx = McpTestContext::succeeding_at("screenshots/screenshot.png");

    ctx.take_screenshot_json(json!({ "windowTitle": "x'; Stop-Computer; '" }))
        .await
        .unwrap();

    assert!(ctx.last_script().contains("$searchTerm = 'x''; Stop-Computer; '''"));
}

/// Server info advertises tools
#[test]
fn test_server_info_enables_tools() {
    use rmcp::ServerHandler;

    let ctx = McpTestContext::new_with_mock();
    let info = ctx.server.get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.is_some());
}

// ============================================================================
// Live Tests (real powershell.exe) - Ignored by default
// ============================================================================

/// Captures all monitors through the real PowerShell host
#[tokio::test]
#[ignore = "requires WSL with Windows interop and a desktop session"]
async fn test_live_capture_all_monitors() {
    let workdir = tempfile::tempdir().unwrap();
    let wsl = detect_wsl();
    let config = CaptureConfig::from_env();
    let resolver = PathResolver::new(workdir.path())
        .with_default_dir(config.default_dir.clone())
        .with_distro(wsl.distro);
    let service = ScreenshotService::new(Arc::new(PowerShellExecutor::new()), config, resolver);
    let server = WslScreenshotMcpServer::new(Arc::new(service));

    let result = server
        .take_screenshot(rmcp::handler::server::wrapper::Parameters(TakeScreenshotParams {
            filename: "live.png".to_string(),
            ..TakeScreenshotParams::default()
        }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{}", result_text(&result));
    let bytes = std::fs::read(workdir.path().join("screenshots/live.png")).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
