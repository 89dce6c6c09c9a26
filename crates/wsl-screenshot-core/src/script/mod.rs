//! PowerShell script generation
//!
//! Every capture is one self-contained script run by a fresh `powershell.exe`.
//! The builder binds caller values to variables as single-quoted literals and
//! then appends fixed fragments that only read those variables.

mod encode;
mod literal;
mod templates;

pub use encode::{MAX_COMMAND_LINE, decode_script, encode_script};
pub use literal::ps_literal;

use std::fmt::Write as _;

use crate::capture::CaptureStrategy;
use crate::config::CaptureConfig;

/// Arguments placed before `-EncodedCommand`
pub const POWERSHELL_FLAGS: [&str; 7] = [
    "-NoProfile",
    "-NonInteractive",
    "-ExecutionPolicy",
    "Bypass",
    "-OutputFormat",
    "Text",
    "-EncodedCommand",
];

/// Builds the capture script for one strategy
///
/// `output_path` is the destination in the Windows host's path dialect.
///
/// # Examples
///
/// ```
/// use wsl_screenshot_core::{capture::CaptureStrategy, config::CaptureConfig, script};
///
/// let text = script::build_capture_script(
///     &CaptureStrategy::AllMonitors,
///     r"C:\shots\desk.png",
///     &CaptureConfig::default(),
/// );
/// assert!(text.contains(r"$outputPath = 'C:\shots\desk.png'"));
/// assert!(text.contains("VirtualScreen"));
/// ```
pub fn build_capture_script(
    strategy: &CaptureStrategy,
    output_path: &str,
    config: &CaptureConfig,
) -> String {
    let mut script = String::with_capacity(8 * 1024);
    script.push_str(templates::PREAMBLE);
    script.push_str(templates::DPI_AWARENESS);
    script.push_str(templates::WINDOW_ENUMERATION);

    script.push('\n');
    bind(&mut script, "outputPath", &ps_literal(output_path));
    script.push_str(templates::SAVE_REGION);

    script.push('\n');
    match strategy {
        CaptureStrategy::WindowByTitle(title) => {
            bind_window_settings(&mut script, config);
            bind(&mut script, "searchTerm", &ps_literal(title));
            script.push_str(templates::FIND_BY_TITLE);
            script.push_str(templates::CAPTURE_WINDOW);
        }
        CaptureStrategy::WindowByProcess(name) => {
            bind_window_settings(&mut script, config);
            bind(&mut script, "searchTerm", &ps_literal(name));
            script.push_str(templates::FIND_BY_PROCESS);
            script.push_str(templates::CAPTURE_WINDOW);
        }
        CaptureStrategy::Monitor(selector) => {
            bind(&mut script, "monitorSelector", &ps_literal(&selector.script_value()));
            script.push_str(templates::CAPTURE_MONITOR);
        }
        CaptureStrategy::AllMonitors => {
            script.push_str(templates::CAPTURE_ALL_MONITORS);
        }
    }

    script
}

/// Builds the script that prints visible windows as a JSON array
pub fn build_list_windows_script() -> String {
    let mut script = String::with_capacity(4 * 1024);
    script.push_str(templates::PREAMBLE);
    script.push_str(templates::WINDOW_ENUMERATION);
    script.push_str(templates::LIST_WINDOWS_JSON);
    script
}

fn bind_window_settings(script: &mut String, config: &CaptureConfig) {
    bind(script, "padding", &config.window_padding_px.to_string());
    bind(script, "settleMs", &config.settle_delay_ms.to_string());
}

fn bind(script: &mut String, name: &str, value: &str) {
    // Writing into a String cannot fail
    let _ = writeln!(script, "${} = {}", name, value);
}

/// A ready-to-spawn `powershell.exe` command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerShellInvocation {
    program: String,
    encoded_script: String,
}

impl PowerShellInvocation {
    /// Encodes `script` for `program`
    pub fn new(program: impl Into<String>, script: &str) -> Self {
        Self {
            program: program.into(),
            encoded_script: encode_script(script),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn encoded_script(&self) -> &str {
        &self.encoded_script
    }

    /// Full argument vector, encoded script last
    pub fn args(&self) -> Vec<String> {
        POWERSHELL_FLAGS
            .iter()
            .map(|flag| flag.to_string())
            .chain(std::iter::once(self.encoded_script.clone()))
            .collect()
    }

    /// The script text, decoded back from the argument
    pub fn decoded_script(&self) -> Option<String> {
        decode_script(&self.encoded_script)
    }

    /// Approximate command-line length as Windows sees it
    pub fn command_line_len(&self) -> usize {
        self.args()
            .iter()
            .map(|arg| arg.len() + 1)
            .sum::<usize>()
            + self.program.len()
    }
}
