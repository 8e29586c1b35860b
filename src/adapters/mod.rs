//! Adapters layer: Concrete implementations of ports.
//!
//! - `model_file`: JSON model artifact loader
//! - `csv_file`: CSV dataset loader

pub mod csv_file;
pub mod model_file;

use std::path::{Path, PathBuf};

/// Resolve a resource path: environment override first, otherwise relative
/// to the directory holding the running executable.
#[must_use]
pub fn resolve_path(relative: &str, env_var: &str) -> PathBuf {
    if let Ok(value) = std::env::var(env_var) {
        return PathBuf::from(value);
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    match exe_dir {
        Some(dir) => dir.join(relative),
        None => PathBuf::from(relative),
    }
}
