//! Platform privilege detection
//!
//! `geteuid() == 0` on Unix, `IsUserAnAdmin()` on Windows. Anything else
//! is never elevated and has no native symlinks.

use crate::domain::ports::PrivilegeProbe;

/// Probe backed by the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessPrivilege;

impl PrivilegeProbe for ProcessPrivilege {
    fn has_elevated_privilege(&self) -> bool {
        has_elevated_privilege()
    }
}

/// True if the current process runs as root / administrator
#[cfg(unix)]
pub fn has_elevated_privilege() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

/// True if the current process runs as root / administrator
#[cfg(windows)]
pub fn has_elevated_privilege() -> bool {
    // SAFETY: IsUserAnAdmin takes no arguments and only reads the process token
    unsafe { windows::Win32::UI::Shell::IsUserAnAdmin().as_bool() }
}

/// True if the current process runs as root / administrator
#[cfg(not(any(unix, windows)))]
pub fn has_elevated_privilege() -> bool {
    false
}
