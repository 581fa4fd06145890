//! Test environment for isolated refdeploy runs.
//!
//! Provides `TestEnv` - a temp project directory (the working directory,
//! holding `build/bin` and `Test/Test`) and a temp game directory, plus
//! helpers to run the refdeploy binary.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use refdeploy::{Manifest, SourceRoot};
use tempfile::TempDir;

/// Result of running the refdeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project and game directories
pub struct TestEnv {
    /// Working directory for every run
    pub project_root: TempDir,
    /// Passed as `--gamedir`
    pub game_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, empty game dir
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            game_root: TempDir::new().expect("Failed to create game dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_refdeploy")),
        }
    }

    /// Project holding every source the built-in manifest names
    pub fn with_build_output() -> Self {
        let env = Self::new();
        env.write_build_output();
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn game_path(&self, relative: &str) -> PathBuf {
        self.game_root.path().join(relative)
    }

    /// `--gamedir=<game dir>`
    pub fn gamedir_arg(&self) -> String {
        format!("--gamedir={}", self.game_root.path().display())
    }

    /// Run refdeploy from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run refdeploy from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("REFDEPLOY_MANIFEST")
            .env_remove("REFDEPLOY_LOG")
            .env("REFDEPLOY_NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute refdeploy");
        Self::output_to_result(output)
    }

    /// `run` with `--gamedir` prepended
    pub fn deploy(&self, args: &[&str]) -> TestResult {
        let gamedir = self.gamedir_arg();
        let mut full = vec![gamedir.as_str()];
        full.extend_from_slice(args);
        self.run(&full)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write a file to the game directory
    pub fn write_game_file(&self, relative_path: &str, content: &str) {
        write_file(&self.game_path(relative_path), content);
    }

    /// Create every source of the built-in manifest with distinct content
    pub fn write_build_output(&self) {
        let manifest = Manifest::builtin().expect("built-in manifest");
        for group in &manifest.groups {
            let root = match group.source_root {
                SourceRoot::Cwd => self.project_root.path().to_path_buf(),
                SourceRoot::Bindir => self.project_path("build/bin"),
            };
            for file in &group.files {
                write_file(&root.join(file), &format!("{} contents", file.display()));
            }
            for dir in &group.dirs {
                let dir = root.join(dir);
                write_file(&dir.join("Routes.cs"), "// routes");
                write_file(&dir.join("wwwroot/index.html"), "<html></html>");
            }
        }
    }

    /// Every file under the game dir with its content, keyed by relative path
    pub fn game_tree(&self) -> BTreeMap<String, String> {
        let mut tree = BTreeMap::new();
        collect_tree(self.game_root.path(), self.game_root.path(), &mut tree);
        tree
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn collect_tree(root: &Path, dir: &Path, out: &mut BTreeMap<String, String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        if path.is_dir() {
            out.insert(format!("{}/", relative), String::new());
            collect_tree(root, &path, out);
        } else {
            out.insert(relative, std::fs::read_to_string(&path).unwrap_or_default());
        }
    }
}
