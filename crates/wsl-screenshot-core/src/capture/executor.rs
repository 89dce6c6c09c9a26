//! Script execution seam
//!
//! [`ScriptExecutor`] is the only place the crate touches the Windows host.
//! [`PowerShellExecutor`] launches `powershell.exe` through WSL interop;
//! tests substitute [`MockExecutor`](super::mock::MockExecutor).

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::{
    error::{ScreenshotError, ScreenshotResult},
    model::ExecutionOutcome,
    script::PowerShellInvocation,
};

/// Runs an encoded PowerShell invocation to completion
///
/// A process that starts and then fails is not an error here: its output is
/// returned in the [`ExecutionOutcome`] for the classifier to judge. Only a
/// failure to launch at all is an `Err`.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    async fn execute(&self, invocation: &PowerShellInvocation) -> ScreenshotResult<ExecutionOutcome>;
}

/// Executes scripts with the real `powershell.exe`
#[derive(Debug, Clone, Default)]
pub struct PowerShellExecutor;

impl PowerShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptExecutor for PowerShellExecutor {
    async fn execute(&self, invocation: &PowerShellInvocation) -> ScreenshotResult<ExecutionOutcome> {
        debug!(
            program = invocation.program(),
            command_line_len = invocation.command_line_len(),
            "Launching PowerShell"
        );

        let output = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(std::process::Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ScreenshotError::LaunchFailed {
                program: invocation.program().to_string(),
                source,
            })?;

        let outcome = ExecutionOutcome {
            exited_abnormally: !output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if outcome.exited_abnormally {
            warn!(status = %output.status, "PowerShell exited abnormally");
        } else {
            debug!(
                stdout_len = outcome.stdout.len(),
                stderr_len = outcome.stderr.len(),
                "PowerShell finished"
            );
        }

        Ok(outcome)
    }
}
