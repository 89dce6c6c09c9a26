//! Capture tuning constants and their runtime overrides.
//!
//! The window padding and the foreground settle delay were tuned against a
//! single Windows desktop, so they are defaults rather than fixed values.
//!
//! # Runtime Configuration
//!
//! | Environment Variable | Default | Description |
//! |----------------------|---------|-------------|
//! | `WSL_SCREENSHOT_WINDOW_PADDING` | 10 | Margin (px) added around captured windows |
//! | `WSL_SCREENSHOT_SETTLE_MS` | 200 | Delay after bringing a window to the foreground |
//! | `WSL_SCREENSHOT_POWERSHELL` | `powershell.exe` | PowerShell executable to launch |
//! | `WSL_SCREENSHOT_DEFAULT_DIR` | `screenshots` | Folder used when no folder is requested |
//!
//! Values that fail to parse fall back to the default.

/// Margin added on every side of a captured window to include its shadow and
/// border.
pub const WINDOW_PADDING_PX: u32 = 10;

/// Time given to a window to finish repainting after it is brought to the
/// foreground.
pub const FOREGROUND_SETTLE_MS: u64 = 200;

/// PowerShell executable reachable through WSL interop.
pub const POWERSHELL_PROGRAM: &str = "powershell.exe";

/// Folder, relative to the working directory, used when the caller does not
/// name one.
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Tunables for one capture service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Margin (px) added around captured windows
    pub window_padding_px: u32,
    /// Delay (ms) after foregrounding a window
    pub settle_delay_ms: u64,
    /// PowerShell executable
    pub powershell_program: String,
    /// Default output folder, relative to the working directory
    pub default_dir: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            window_padding_px: WINDOW_PADDING_PX,
            settle_delay_ms: FOREGROUND_SETTLE_MS,
            powershell_program: POWERSHELL_PROGRAM.to_string(),
            default_dir: DEFAULT_SCREENSHOT_DIR.to_string(),
        }
    }
}

impl CaptureConfig {
    /// Builds a config from the process environment.
    ///
    /// # Example
    ///
    /// ```bash
    /// # Wait longer for slow-painting apps
    /// export WSL_SCREENSHOT_SETTLE_MS=500
    /// ```
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Builds a config from a custom environment provider.
    pub fn from_env_with<F>(env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            window_padding_px: parse_or(
                env("WSL_SCREENSHOT_WINDOW_PADDING"),
                defaults.window_padding_px,
            ),
            settle_delay_ms: parse_or(env("WSL_SCREENSHOT_SETTLE_MS"), defaults.settle_delay_ms),
            powershell_program: non_empty_or(
                env("WSL_SCREENSHOT_POWERSHELL"),
                defaults.powershell_program,
            ),
            default_dir: non_empty_or(env("WSL_SCREENSHOT_DEFAULT_DIR"), defaults.default_dir),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty_or(value: Option<String>, default: String) -> String {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}
