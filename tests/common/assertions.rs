//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that an entry exists under the game dir.
///
/// # Example
/// ```ignore
/// assert_deployed!(env, "reframework/plugins/Ijwhost.dll");
/// ```
#[macro_export]
macro_rules! assert_deployed {
    ($env:expr, $path:expr) => {
        let full_path = $env.game_path($path);
        assert!(
            full_path.symlink_metadata().is_ok(),
            "Expected '{}' under the game dir, but it doesn't exist.\n\
             Game dir: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.game_root.path(),
            $crate::common::list_all_files($env.game_root.path()).join("\n  ")
        );
    };
}

/// Assert that nothing exists at a path under the game dir.
#[macro_export]
macro_rules! assert_not_deployed {
    ($env:expr, $path:expr) => {
        let full_path = $env.game_path($path);
        assert!(
            full_path.symlink_metadata().is_err(),
            "Expected '{}' to NOT exist under the game dir, but it does.",
            $path
        );
    };
}

/// Assert that the game dir is still empty.
#[macro_export]
macro_rules! assert_game_untouched {
    ($env:expr) => {
        let files = $crate::common::list_all_files($env.game_root.path());
        let dirs = std::fs::read_dir($env.game_root.path())
            .map(|entries| entries.count())
            .unwrap_or(0);
        assert!(
            files.is_empty() && dirs == 0,
            "Expected no writes under the game dir, found:\n  {}",
            files.join("\n  ")
        );
    };
}
