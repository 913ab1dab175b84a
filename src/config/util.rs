//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find a config file by searching upward from a start directory
///
/// Walks up parent directories until finding `name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/sitegen.toml    ← found!
/// ```
pub fn find_config_file(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
