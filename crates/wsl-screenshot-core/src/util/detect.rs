//! WSL environment detection
//!
//! The capture script runs on the Windows side, so the server is only useful
//! inside WSL. Detection is advisory: it is logged at start-up and supplies
//! the distro name used to build `\\wsl.localhost\<distro>\...` paths for
//! folders that live in the Linux filesystem.

use std::{env, fs};

/// Detected runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WslEnvironment {
    /// Whether the process appears to run under WSL
    pub is_wsl: bool,
    /// Distro name from `WSL_DISTRO_NAME`, if set
    pub distro: Option<String>,
}

/// Detects whether the current process runs under WSL
///
/// Checks, in order:
/// - `$WSL_DISTRO_NAME` (set by WSL for every process)
/// - `$WSL_INTEROP` (set when Windows interop is enabled)
/// - the kernel release in `/proc/sys/kernel/osrelease`, which contains
///   "microsoft" on WSL kernels
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::util::detect::detect_wsl;
///
/// let env = detect_wsl();
/// println!("WSL: {} (distro: {:?})", env.is_wsl, env.distro);
/// ```
pub fn detect_wsl() -> WslEnvironment {
    detect_wsl_with(
        |key| env::var(key).ok(),
        || fs::read_to_string("/proc/sys/kernel/osrelease").ok(),
    )
}

/// Detection with injected environment and kernel-release providers
fn detect_wsl_with<F, K>(env_provider: F, kernel_release: K) -> WslEnvironment
where
    F: Fn(&str) -> Option<String>,
    K: Fn() -> Option<String>,
{
    let distro = env_provider("WSL_DISTRO_NAME")
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let is_wsl = distro.is_some()
        || env_provider("WSL_INTEROP").is_some_and(|v| !v.is_empty())
        || kernel_release().is_some_and(|release| release.to_lowercase().contains("microsoft"));

    WslEnvironment { is_wsl, distro }
}
