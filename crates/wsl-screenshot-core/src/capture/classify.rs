//! Result classification for capture script runs
//!
//! PowerShell started through `-EncodedCommand` writes structured diagnostic
//! records to stderr even when the script succeeds. Those records are tagged
//! with `FullyQualifiedErrorId`, so a bare "Error" in stderr only counts when
//! no "ErrorId" tag accompanies it. Raised exceptions, "Exception",
//! "not found" and a failed window search always count, whether or not the
//! host decorates the error record.

use std::path::Path;

use tracing::{debug, warn};

use crate::{
    error::{ScreenshotError, ScreenshotResult},
    model::ExecutionOutcome,
};

/// Marker left in stderr by an uncaught `throw` in the script
const RAISED_EXCEPTION_MARKER: &str = "throw";
/// Phrase the window strategies raise when nothing matched
const NO_WINDOW_FOUND: &str = "No window found";

/// Whether the diagnostic stream reports a real failure
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::capture::is_real_failure;
///
/// assert!(is_real_failure("Monitor 5 not found. Valid range: 1 to 2"));
/// assert!(is_real_failure("No window found with title containing: Paint"));
/// assert!(!is_real_failure("Error record\n+ FullyQualifiedErrorId : NativeCommandError"));
/// assert!(!is_real_failure(""));
/// ```
pub fn is_real_failure(stderr: &str) -> bool {
    stderr.contains(RAISED_EXCEPTION_MARKER)
        || stderr.contains("Exception")
        || stderr.contains("not found")
        || stderr.contains(NO_WINDOW_FOUND)
        || (stderr.contains("Error") && !stderr.contains("ErrorId"))
}

/// Judges a finished script run
///
/// Returns the script's status line (its last non-empty stdout line) when
/// the run counts as a success. A real failure becomes
/// [`ScreenshotError::ScriptFailed`]; when no window matched, the window list
/// the script printed to stdout travels with it.
///
/// A clean verdict here is not final: the caller still has to confirm the
/// image exists with [`verify_output`].
pub fn classify_outcome(outcome: &ExecutionOutcome) -> ScreenshotResult<Option<String>> {
    let stderr = outcome.stderr.trim();

    if is_real_failure(stderr) {
        let stdout = outcome.stdout.trim();
        let windows = if stderr.contains(NO_WINDOW_FOUND) && !stdout.is_empty() {
            warn!("No window matched, available windows:\n{}", stdout);
            Some(stdout.to_string())
        } else {
            None
        };

        return Err(ScreenshotError::ScriptFailed {
            message: stderr.to_string(),
            windows,
        });
    }

    if !stderr.is_empty() {
        debug!(stderr = %stderr, "Ignoring PowerShell diagnostic output");
    }

    if outcome.exited_abnormally {
        warn!("PowerShell exited abnormally without reporting an error, checking output file");
    }

    Ok(status_line(&outcome.stdout))
}

/// Confirms the image exists after a run classified as success
pub async fn verify_output(host_path: &Path) -> ScreenshotResult<()> {
    match tokio::fs::try_exists(host_path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ScreenshotError::OutputMissing {
            path: host_path.to_path_buf(),
        }),
        Err(e) => {
            warn!("Failed to check {}: {}", host_path.display(), e);
            Err(ScreenshotError::OutputMissing {
                path: host_path.to_path_buf(),
            })
        }
    }
}

fn status_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
