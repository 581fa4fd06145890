//! Privilege port
//!
//! Creating symlinks needs an elevated process on Windows; the tool
//! demands it everywhere except in copy-only mode.

/// Answers "may this process create symlinks?"
pub trait PrivilegeProbe {
    /// True if the process runs as root / administrator
    fn has_elevated_privilege(&self) -> bool;

    /// True if the platform can create native symlinks at all
    fn supports_symlinks(&self) -> bool {
        cfg!(any(unix, windows))
    }
}

/// Probe with a fixed answer, for tests and `--dry_run`
#[derive(Debug, Clone, Copy)]
pub struct FixedPrivilege {
    pub elevated: bool,
    pub symlinks: bool,
}

impl FixedPrivilege {
    pub fn elevated() -> Self {
        Self {
            elevated: true,
            symlinks: true,
        }
    }

    pub fn unprivileged() -> Self {
        Self {
            elevated: false,
            symlinks: true,
        }
    }
}

impl PrivilegeProbe for FixedPrivilege {
    fn has_elevated_privilege(&self) -> bool {
        self.elevated
    }

    fn supports_symlinks(&self) -> bool {
        self.symlinks
    }
}
