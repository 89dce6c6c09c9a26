//! Output path resolution across the WSL and Windows filesystems
//!
//! A screenshot is written by PowerShell on the Windows side but verified on
//! the WSL side, so every destination needs two spellings:
//!
//! - the **host path** (`/mnt/c/Users/me/shot.png`), used for the directory
//!   creation and the existence check
//! - the **foreign path** (`C:\Users\me\shot.png`), embedded in the script
//!
//! Translation between the two is restricted to the mounted-drive convention
//! `/mnt/<letter>/<rest>` ⇄ `<LETTER>:\<rest>`. Anything else passes through
//! [`to_windows_path`] and [`to_wsl_path`] unchanged.
//!
//! # Examples
//!
//! ```
//! use wsl_screenshot_core::path::{to_windows_path, to_wsl_path};
//!
//! assert_eq!(to_windows_path("/mnt/c/Users/me"), r"C:\Users\me");
//! assert_eq!(to_wsl_path(r"D:\data\shots"), "/mnt/d/data/shots");
//! assert_eq!(to_windows_path("/home/me"), "/home/me");
//! ```

use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    config::DEFAULT_SCREENSHOT_DIR,
    error::{ScreenshotError, ScreenshotResult},
    model::ResolvedDestination,
};

static MOUNTED_DRIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/mnt/([a-z])(/.*)?$").expect("mounted drive pattern is valid"));

static WINDOWS_DRIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]):[\\/](.*)$").expect("drive letter pattern is valid"));

/// Returns true for `/mnt/<lowercase letter>` paths
pub fn is_mounted_drive_path(path: &str) -> bool {
    MOUNTED_DRIVE.is_match(path)
}

/// Returns true for drive-rooted Windows paths such as `C:\` or `d:/data`
pub fn is_windows_absolute_path(path: &str) -> bool {
    WINDOWS_DRIVE.is_match(path)
}

/// Translates a WSL mounted-drive path to its Windows spelling
pub fn to_windows_path(host: &str) -> String {
    match MOUNTED_DRIVE.captures(host) {
        Some(caps) => {
            let drive = caps[1].to_ascii_uppercase();
            let rest = caps.get(2).map_or("", |m| m.as_str());
            let rest = rest.strip_prefix('/').unwrap_or(rest);
            format!("{}:\\{}", drive, rest.replace('/', "\\"))
        }
        None => host.to_string(),
    }
}

/// Translates a drive-rooted Windows path to its WSL mount-point spelling
pub fn to_wsl_path(foreign: &str) -> String {
    match WINDOWS_DRIVE.captures(foreign) {
        Some(caps) => {
            let drive = caps[1].to_ascii_lowercase();
            format!("/mnt/{}/{}", drive, caps[2].replace('\\', "/"))
        }
        None => foreign.to_string(),
    }
}

/// Translates a path into the other dialect
///
/// Applying it twice to any `/mnt/<letter>/<rest>` path yields the original.
pub fn translate_path(path: &str) -> String {
    if is_windows_absolute_path(path) {
        to_wsl_path(path)
    } else {
        to_windows_path(path)
    }
}

/// Resolves requested folders into [`ResolvedDestination`]s
///
/// Relative folders and the default folder are resolved against `base_dir`,
/// normally the server's working directory. A leading `~` is expanded against
/// the home directory when one is configured.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
    default_dir: String,
    distro: Option<String>,
    home_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Creates a resolver rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            default_dir: DEFAULT_SCREENSHOT_DIR.to_string(),
            distro: None,
            home_dir: None,
        }
    }

    /// Overrides the folder used when no folder is requested
    pub fn with_default_dir(mut self, default_dir: impl Into<String>) -> Self {
        self.default_dir = default_dir.into();
        self
    }

    /// Sets the WSL distro name used for `\\wsl.localhost` paths
    ///
    /// Without a distro, host paths outside `/mnt/<letter>` are handed to
    /// PowerShell unchanged.
    pub fn with_distro(mut self, distro: Option<String>) -> Self {
        self.distro = distro;
        self
    }

    /// Sets the directory `~` and `~/...` folders expand to
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = home_dir;
        self
    }

    /// Directory relative folders are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolves `folder` and `filename` into host, foreign, and display paths
    ///
    /// # Errors
    ///
    /// Returns [`ScreenshotError::InvalidParameter`] when `filename` is empty
    /// or contains a path separator.
    pub fn resolve(
        &self,
        folder: Option<&str>,
        filename: &str,
    ) -> ScreenshotResult<ResolvedDestination> {
        validate_filename(filename)?;

        let folder = folder.map(str::trim).filter(|f| !f.is_empty());

        let destination = match folder {
            None => {
                let host_path = self.base_dir.join(&self.default_dir).join(filename);
                ResolvedDestination {
                    foreign_path: self.foreign_for_host(&host_path),
                    display_path: format!("{}/{}", self.default_dir.trim_end_matches('/'), filename),
                    host_path,
                }
            }
            Some(folder) if is_windows_absolute_path(folder) => {
                let foreign_folder = normalize_windows_folder(folder);
                let foreign_path = join_windows(&foreign_folder, filename);
                ResolvedDestination {
                    host_path: PathBuf::from(to_wsl_path(&foreign_folder)).join(filename),
                    display_path: foreign_path.clone(),
                    foreign_path,
                }
            }
            Some(folder) if is_mounted_drive_path(folder) => {
                let host_path = normalize_lexically(Path::new(folder)).join(filename);
                let host_str = host_path.to_string_lossy().into_owned();
                ResolvedDestination {
                    foreign_path: to_windows_path(&host_str),
                    display_path: host_str,
                    host_path,
                }
            }
            Some(folder) => {
                let host_path = normalize_lexically(&self.base_dir.join(self.expand_home(folder))).join(filename);
                let display_path = if Path::new(folder).is_absolute() {
                    host_path.to_string_lossy().into_owned()
                } else {
                    format!("{}/{}", folder.trim_end_matches('/'), filename)
                };
                ResolvedDestination {
                    foreign_path: self.foreign_for_host(&host_path),
                    display_path,
                    host_path,
                }
            }
        };

        debug!(
            host = %destination.host_path.display(),
            foreign = %destination.foreign_path,
            display = %destination.display_path,
            "Resolved screenshot destination"
        );

        Ok(destination)
    }

    /// `~` and `~/rest` become paths under the home directory
    fn expand_home(&self, folder: &str) -> PathBuf {
        let rest = match folder.strip_prefix('~') {
            Some("") => Some(""),
            Some(rest) => rest.strip_prefix('/'),
            None => None,
        };
        match (rest, &self.home_dir) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(folder),
        }
    }

    /// Best-effort Windows spelling for a host path
    fn foreign_for_host(&self, host_path: &Path) -> String {
        let host = host_path.to_string_lossy();
        if is_mounted_drive_path(&host) {
            return to_windows_path(&host);
        }
        match &self.distro {
            Some(distro) if host.starts_with('/') => {
                format!(r"\\wsl.localhost\{}{}", distro, host.replace('/', "\\"))
            }
            _ => host.into_owned(),
        }
    }
}

/// Creates the directory that will hold `destination`, including parents
///
/// # Errors
///
/// Returns [`ScreenshotError::DirectoryCreation`] with the underlying I/O
/// error when the directory cannot be created.
pub async fn ensure_parent_dir(destination: &ResolvedDestination) -> ScreenshotResult<()> {
    let Some(parent) = destination.host_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|source| ScreenshotError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })
}

fn validate_filename(filename: &str) -> ScreenshotResult<()> {
    let reason = if filename.trim().is_empty() {
        Some("must not be empty")
    } else if filename.contains(['/', '\\']) {
        Some("must not contain path separators; use the folder parameter instead")
    } else if filename == "." || filename == ".." {
        Some("must name a file")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScreenshotError::InvalidParameter {
            parameter: "filename".to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// `C:/a/b/` -> `C:\a\b`, keeping the root separator of `C:\`
fn normalize_windows_folder(folder: &str) -> String {
    let flipped = folder.replace('/', "\\");
    let trimmed = flipped.trim_end_matches('\\');
    if trimmed.len() == 2 && trimmed.ends_with(':') {
        format!("{}\\", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn join_windows(folder: &str, filename: &str) -> String {
    if folder.ends_with('\\') {
        format!("{}{}", folder, filename)
    } else {
        format!("{}\\{}", folder, filename)
    }
}

/// Resolves `.` and `..` without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
