//! Mock script executor for testing
//!
//! [`MockExecutor`] stands in for `powershell.exe`. It returns a canned
//! [`ExecutionOutcome`], can write a placeholder PNG where the real script
//! would have saved the screenshot, and records every script it was asked to
//! run so tests can inspect what would have executed on the host.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use wsl_screenshot_core::{
//!     capture::{ScriptExecutor, mock::MockExecutor},
//!     model::ExecutionOutcome,
//!     script::PowerShellInvocation,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let executor = Arc::new(MockExecutor::new().with_outcome(ExecutionOutcome::success("done")));
//!
//!     let invocation = PowerShellInvocation::new("powershell.exe", "Write-Output 'done'");
//!     let outcome = executor.execute(&invocation).await.unwrap();
//!
//!     assert_eq!(outcome.stdout, "done");
//!     assert_eq!(executor.recorded_scripts(), vec!["Write-Output 'done'".to_string()]);
//! }
//! ```

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::sleep;

use super::ScriptExecutor;
use crate::{
    error::{ScreenshotError, ScreenshotResult},
    model::ExecutionOutcome,
    script::PowerShellInvocation,
};

/// Eight-byte PNG signature used as placeholder file content
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Which canned error to return instead of running
#[derive(Debug, Clone, PartialEq, Eq)]
enum InjectedError {
    LaunchFailed(String),
}

/// In-process replacement for [`PowerShellExecutor`](super::PowerShellExecutor)
#[derive(Debug)]
pub struct MockExecutor {
    /// Outcome returned from every execution
    outcome:         ExecutionOutcome,
    /// Optional delay before returning
    delay:           Option<Duration>,
    /// Optional error returned instead of the outcome
    error_injection: Option<InjectedError>,
    /// File created before returning, mimicking a successful capture
    writes_file:     Option<PathBuf>,
    /// Decoded scripts in execution order
    scripts:         Mutex<Vec<String>>,
}

impl MockExecutor {
    /// Creates an executor that reports a clean exit with empty output
    pub fn new() -> Self {
        Self {
            outcome:         ExecutionOutcome::success(""),
            delay:           None,
            error_injection: None,
            writes_file:     None,
            scripts:         Mutex::new(Vec::new()),
        }
    }

    /// Sets the outcome returned by every execution
    pub fn with_outcome(mut self, outcome: ExecutionOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Sleeps for `delay` before returning
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fails every execution as if `program` could not be started
    pub fn with_launch_failure(mut self, program: impl Into<String>) -> Self {
        self.error_injection = Some(InjectedError::LaunchFailed(program.into()));
        self
    }

    /// Writes a placeholder PNG to `path` on each execution
    ///
    /// Parent directories are not created; the capture pipeline is expected
    /// to have done that already.
    pub fn writing_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.writes_file = Some(path.into());
        self
    }

    /// Scripts executed so far, decoded from their transport encoding
    pub fn recorded_scripts(&self) -> Vec<String> {
        self.scripts.lock().clone()
    }

    /// The most recently executed script
    pub fn last_script(&self) -> Option<String> {
        self.scripts.lock().last().cloned()
    }

    pub fn execution_count(&self) -> usize {
        self.scripts.lock().len()
    }

    fn injected_error(&self) -> Option<ScreenshotError> {
        match &self.error_injection {
            Some(InjectedError::LaunchFailed(program)) => Some(ScreenshotError::LaunchFailed {
                program: program.clone(),
                source:  std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            }),
            None => None,
        }
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScriptExecutor for MockExecutor {
    async fn execute(&self, invocation: &PowerShellInvocation) -> ScreenshotResult<ExecutionOutcome> {
        let script = invocation
            .decoded_script()
            .unwrap_or_else(|| invocation.encoded_script().to_string());
        self.scripts.lock().push(script);

        if let Some(duration) = self.delay {
            sleep(duration).await;
        }

        if let Some(error) = self.injected_error() {
            return Err(error);
        }

        if let Some(path) = &self.writes_file {
            tokio::fs::write(path, PNG_SIGNATURE)
                .await
                .map_err(|source| ScreenshotError::LaunchFailed {
                    program: invocation.program().to_string(),
                    source,
                })?;
        }

        Ok(self.outcome.clone())
    }
}
