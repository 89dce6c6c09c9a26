//! wsl-screenshot-core: Windows screenshots from inside WSL
//!
//! This library compiles a screenshot request into a PowerShell script, runs
//! it on the Windows host through WSL interop, and classifies the result.
//! The MCP server and the debugging CLI are thin layers over
//! [`capture::ScreenshotService`].

pub mod capture;
pub mod config;
pub mod error;
pub mod model;
pub mod path;
pub mod response;
pub mod script;
pub mod util;
