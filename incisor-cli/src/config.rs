//! Loads `AnalysisOptions` from an `.incisor.toml` file, the way the
//! teacher crate's `cortex-core::config::GlobalConfig` layers a TOML file
//! under CLI flags -- this CLI has no notion of a user config directory,
//! only a project-local file discovered by walking up from the analyzed
//! path.

use anyhow::{Context, Result};
use incisor_core::config::AnalysisOptions;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".incisor.toml";

/// Walks up from `start` looking for `.incisor.toml`, stopping at the
/// first ancestor that has one.
fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        Some(start.to_path_buf())
    } else {
        start.parent().map(Path::to_path_buf)
    };
    while let Some(candidate) = dir {
        let file = candidate.join(CONFIG_FILE_NAME);
        if file.is_file() {
            return Some(file);
        }
        dir = candidate.parent().map(Path::to_path_buf);
    }
    None
}

/// Loads analysis options for analyzing `target`. `explicit` overrides
/// discovery when the caller passed `--config`; with neither, a plain
/// default (everything off, no search paths) is used.
pub fn load(target: &Path, explicit: Option<&Path>) -> Result<AnalysisOptions> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover(target),
    };
    let Some(path) = path else {
        return Ok(AnalysisOptions::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config file {}", path.display()))
}
