//! Deploy mode value object
//!
//! - `Link`: destinations are symlinks to the absolute source path
//! - `Copy`: destinations are real files / directory trees

/// How an entry lands in the game directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeployMode {
    /// Symlink to the build output (needs an elevated process)
    #[default]
    Link,
    /// Plain copy (`--just_copy`)
    Copy,
}

impl DeployMode {
    /// Select the mode from the `--just_copy` flag
    pub fn from_just_copy(just_copy: bool) -> Self {
        if just_copy {
            DeployMode::Copy
        } else {
            DeployMode::Link
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, DeployMode::Link)
    }

    /// Past-tense verb used in output ("linked", "copied")
    pub fn verb(&self) -> &'static str {
        match self {
            DeployMode::Link => "linked",
            DeployMode::Copy => "copied",
        }
    }

    /// Final line printed after a successful run
    pub fn success_message(&self) -> &'static str {
        match self {
            DeployMode::Link => "Symlinks created successfully",
            DeployMode::Copy => "Files copied successfully",
        }
    }
}

impl std::fmt::Display for DeployMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeployMode::Link => write!(f, "link"),
            DeployMode::Copy => write!(f, "copy"),
        }
    }
}
