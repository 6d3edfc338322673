//! core::link
//!
//! Link strategy selection and filesystem link operations.
//!
//! # Design
//!
//! The platform decision is made exactly once, in [`resolve_strategy`]; the
//! reconciliation loop only ever sees a resolved [`LinkStrategy`]. Each
//! strategy offers a uniform `create(source, target)` / `remove(target)`
//! pair, so callers never branch on the platform themselves.
//!
//! # Strategies
//!
//! - `Symlink` - platform symbolic link; the default everywhere but Windows
//! - `Junction` - Windows directory junction via `mklink /J` (absolute paths
//!   forced); requesting it elsewhere silently degrades to `Symlink`
//! - `Copy` - one-time recursive value copy with no live relationship to the
//!   source afterwards

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors from link operations.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Underlying filesystem call failed.
    #[error("I/O error at '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    /// The platform call to create a junction failed. Propagated, not
    /// retried.
    #[error("junction creation failed for '{target}': {stderr}")]
    JunctionFailed { target: PathBuf, stderr: String },
}

fn io_err(path: &Path, source: io::Error) -> LinkError {
    LinkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// The platform family a strategy is resolved for.
///
/// An explicit value rather than an ambient `cfg!` check, so
/// [`resolve_strategy`] stays a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows-like: junctions available, junction is the default.
    Windows,
    /// Everything else: symlinks are the default.
    Unix,
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Whether this is the Windows-like platform.
    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

/// How a namespace target is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStrategy {
    /// Symbolic link.
    Symlink,
    /// Directory junction (Windows reparse point).
    Junction,
    /// Full recursive copy.
    Copy,
}

/// Pick the effective strategy for a platform.
///
/// An explicit request wins, except that `Junction` on a non-Windows
/// platform silently degrades to `Symlink` - this never fails. With no
/// request, Windows defaults to `Junction` and everything else to
/// `Symlink`.
pub fn resolve_strategy(requested: Option<LinkStrategy>, platform: Platform) -> LinkStrategy {
    match requested {
        Some(LinkStrategy::Junction) if !platform.is_windows() => LinkStrategy::Symlink,
        Some(strategy) => strategy,
        None if platform.is_windows() => LinkStrategy::Junction,
        None => LinkStrategy::Symlink,
    }
}

impl LinkStrategy {
    /// Strategy name as it appears on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkStrategy::Symlink => "symlink",
            LinkStrategy::Junction => "junction",
            LinkStrategy::Copy => "copy",
        }
    }

    /// Materialize `target` from `source` using this strategy.
    ///
    /// The caller is responsible for making sure `target` does not already
    /// exist and that its parent directory does.
    pub fn create(self, source: &Path, target: &Path) -> Result<(), LinkError> {
        match self {
            LinkStrategy::Symlink => symlink(source, target).map_err(|e| io_err(target, e)),
            LinkStrategy::Junction => {
                if cfg!(windows) {
                    create_junction(source, target)
                } else {
                    // Unreachable after resolve_strategy; behaves as Symlink.
                    symlink(source, target).map_err(|e| io_err(target, e))
                }
            }
            LinkStrategy::Copy => copy_recursive(source, target).map_err(|e| io_err(target, e)),
        }
    }

    /// Remove whatever currently sits at `target`.
    ///
    /// A symlink is unlinked itself (its referent is never touched), a
    /// plain directory is deleted recursively, a plain file is removed.
    pub fn remove(self, target: &Path) -> Result<(), LinkError> {
        let meta = fs::symlink_metadata(target).map_err(|e| io_err(target, e))?;
        let result = if meta.file_type().is_symlink() {
            remove_symlink(target)
        } else if meta.is_dir() {
            fs::remove_dir_all(target)
        } else {
            fs::remove_file(target)
        };
        result.map_err(|e| io_err(target, e))
    }
}

impl std::fmt::Display for LinkStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create a platform symbolic link.
#[cfg(unix)]
fn symlink(source: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

/// Create a platform symbolic link.
#[cfg(windows)]
fn symlink(source: &Path, target: &Path) -> io::Result<()> {
    if source.is_dir() {
        std::os::windows::fs::symlink_dir(source, target)
    } else {
        std::os::windows::fs::symlink_file(source, target)
    }
}

/// Create a directory junction via `mklink /J`.
///
/// Junctions require absolute paths, so both sides are absolutized first.
fn create_junction(source: &Path, target: &Path) -> Result<(), LinkError> {
    let target_abs = std::path::absolute(target).map_err(|e| io_err(target, e))?;
    let source_abs = std::path::absolute(source).map_err(|e| io_err(source, e))?;

    let output = Command::new("cmd")
        .args(["/c", "mklink", "/J"])
        .arg(&target_abs)
        .arg(&source_abs)
        .output()
        .map_err(|e| io_err(target, e))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(LinkError::JunctionFailed {
            target: target_abs,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Unlink a symlink without touching its referent.
#[cfg(unix)]
fn remove_symlink(target: &Path) -> io::Result<()> {
    fs::remove_file(target)
}

/// Unlink a symlink without touching its referent.
///
/// Directory symlinks and junctions need `remove_dir` on Windows.
#[cfg(windows)]
fn remove_symlink(target: &Path) -> io::Result<()> {
    fs::remove_file(target).or_else(|_| fs::remove_dir(target))
}

/// Recursively copy a directory tree, or a single file.
fn copy_recursive(source: &Path, target: &Path) -> io::Result<()> {
    if source.is_dir() {
        fs::create_dir_all(target)?;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            let dest = target.join(entry.file_name());
            if entry.path().is_dir() {
                copy_recursive(&entry.path(), &dest)?;
            } else {
                fs::copy(entry.path(), dest)?;
            }
        }
        Ok(())
    } else {
        fs::copy(source, target).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================================
    // Strategy selection tests
    // =============================================================

    #[test]
    fn default_on_windows_is_junction() {
        assert_eq!(
            resolve_strategy(None, Platform::Windows),
            LinkStrategy::Junction
        );
    }

    #[test]
    fn default_on_unix_is_symlink() {
        assert_eq!(resolve_strategy(None, Platform::Unix), LinkStrategy::Symlink);
    }

    #[test]
    fn junction_on_unix_falls_back_to_symlink() {
        assert_eq!(
            resolve_strategy(Some(LinkStrategy::Junction), Platform::Unix),
            LinkStrategy::Symlink
        );
    }

    #[test]
    fn explicit_request_wins_otherwise() {
        assert_eq!(
            resolve_strategy(Some(LinkStrategy::Copy), Platform::Windows),
            LinkStrategy::Copy
        );
        assert_eq!(
            resolve_strategy(Some(LinkStrategy::Symlink), Platform::Windows),
            LinkStrategy::Symlink
        );
        assert_eq!(
            resolve_strategy(Some(LinkStrategy::Junction), Platform::Windows),
            LinkStrategy::Junction
        );
    }

    // =============================================================
    // Create/remove tests
    // =============================================================

    #[test]
    fn copy_duplicates_tree_with_no_live_relationship() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        fs::create_dir_all(source.join("skill-a")).unwrap();
        fs::write(source.join("skill-a/SKILL.md"), "original").unwrap();

        LinkStrategy::Copy.create(&source, &target).unwrap();
        assert_eq!(
            fs::read_to_string(target.join("skill-a/SKILL.md")).unwrap(),
            "original"
        );

        // Later mutation of the source must not show through.
        fs::write(source.join("skill-a/SKILL.md"), "changed").unwrap();
        assert_eq!(
            fs::read_to_string(target.join("skill-a/SKILL.md")).unwrap(),
            "original"
        );
    }

    #[test]
    fn copy_handles_single_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("file.txt");
        let target = dir.path().join("copied.txt");
        fs::write(&source, "contents").unwrap();

        LinkStrategy::Copy.create(&source, &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "contents");
    }

    #[cfg(unix)]
    #[test]
    fn symlink_create_resolves_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("SKILL.md"), "hello").unwrap();

        LinkStrategy::Symlink.create(&source, &target).unwrap();
        assert_eq!(fs::read_to_string(target.join("SKILL.md")).unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn remove_unlinks_symlink_but_not_referent() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        fs::create_dir_all(&source).unwrap();
        LinkStrategy::Symlink.create(&source, &target).unwrap();

        LinkStrategy::Symlink.remove(&target).unwrap();
        assert!(!target.exists());
        assert!(source.exists());
    }

    #[test]
    fn remove_deletes_plain_directory_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir_all(target.join("nested")).unwrap();
        fs::write(target.join("nested/file"), "x").unwrap();

        LinkStrategy::Symlink.remove(&target).unwrap();
        assert!(!target.exists());
    }
}
