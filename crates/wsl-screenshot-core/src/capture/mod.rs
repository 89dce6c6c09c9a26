//! Capture pipeline
//!
//! This module turns a [`CaptureRequest`](crate::model::CaptureRequest) into a
//! PowerShell run and judges the result. It includes:
//!
//! - `CaptureStrategy`: which of the four capture modes applies
//! - `ScriptExecutor`: trait for running an encoded script on the Windows host,
//!   with the real `PowerShellExecutor` and the `MockExecutor` used in tests
//! - The result classifier that separates real failures from PowerShell's
//!   diagnostic noise
//! - `ScreenshotService`: the end-to-end pipeline

pub mod classify;
pub mod executor;
pub mod mock;
pub mod service;
pub mod strategy;
pub mod windows;

pub use classify::{classify_outcome, is_real_failure, verify_output};
pub use executor::{PowerShellExecutor, ScriptExecutor};
pub use mock::MockExecutor;
pub use service::{CapturePlan, CaptureReport, ScreenshotService};
pub use strategy::{CaptureStrategy, select_strategy, strip_exe_suffix};
pub use windows::parse_window_list;
