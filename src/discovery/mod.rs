//! Project config and canvas discovery.
//!
//! A project is any directory. When it holds a `chalk.yaml`, that file adds
//! paints, overrides tool tokens and sets CLI defaults.
//!
//! # Example
//!
//! ```ignore
//! use chalk::discovery::discover;
//!
//! let project = discover(".")?;
//! let palette = project.config.palette()?;
//! println!("Found {} canvases", project.canvases.len());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::{Config, PaintConfig};
pub use scanner::{is_canvas_file, scan_directory, scan_paths};

/// The name of the config file.
pub const CONFIG_FILENAME: &str = "chalk.yaml";

/// Result of discovering a project.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded config (default if no chalk.yaml was found).
    pub config: Config,

    /// Whether a chalk.yaml config was found.
    pub has_config: bool,

    /// Canvas records under the root.
    pub canvases: Vec<PathBuf>,
}

/// Load the config for a directory, falling back to defaults.
///
/// Returns the config and whether a file was found.
pub fn load_config(root: &Path) -> Result<(Config, bool)> {
    let path = root.join(CONFIG_FILENAME);
    if path.exists() {
        Ok((Config::load(&path)?, true))
    } else {
        Ok((Config::default(), false))
    }
}

/// Resolve the config for a CLI invocation: an explicit path wins, then
/// `chalk.yaml` in the working directory.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => load_config(Path::new(".")).map(|(config, _)| config),
    }
}

/// Discover the config and canvas records of a project directory.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let (config, has_config) = load_config(&root)?;
    let canvases = scan_directory(&root, &config);

    Ok(Project {
        root,
        config,
        has_config,
        canvases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let project = discover(dir.path()).unwrap();

        assert!(!project.has_config);
        assert!(project.canvases.is_empty());
    }

    #[test]
    fn test_discover_with_config() {
        let dir = tempdir().unwrap();

        fs::write(
            dir.path().join("chalk.yaml"),
            r#"
scale: 4
excludes:
  - "**/old/*"
"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("old")).unwrap();
        fs::write(dir.path().join("logo.canvas.json"), "{}").unwrap();
        fs::write(dir.path().join("old/logo.canvas.json"), "{}").unwrap();

        let project = discover(dir.path()).unwrap();

        assert!(project.has_config);
        assert_eq!(project.config.effective_scale(), 4);
        assert_eq!(project.canvases.len(), 1);
    }

    #[test]
    fn test_discover_invalid_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("chalk.yaml"), "paints: 7").unwrap();

        assert!(discover(dir.path()).is_err());
    }

    #[test]
    fn test_resolve_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "scale: 3").unwrap();

        let config = resolve_config(Some(&path)).unwrap();
        assert_eq!(config.scale, Some(3));

        assert!(resolve_config(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}
