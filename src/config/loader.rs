//! Manifest discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{DeployError, DeployResult};

use super::types::{LoadedManifest, ManifestSource, MANIFEST_ENV_VAR, PROJECT_MANIFEST_FILE};

/// Pick the manifest: flag, then `REFDEPLOY_MANIFEST`, then
/// `<cwd>/refdeploy.toml` if present, then the built-in one.
pub fn resolve_manifest_source(flag: Option<&Path>, cwd: &Path) -> ManifestSource {
    let env = std::env::var_os(MANIFEST_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_manifest_source_with(flag, env, cwd)
}

/// Same as [`resolve_manifest_source`] with the environment value passed in
pub fn resolve_manifest_source_with(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    cwd: &Path,
) -> ManifestSource {
    if let Some(path) = flag {
        return ManifestSource::Flag(path.to_path_buf());
    }
    if let Some(path) = env {
        return ManifestSource::Env(path);
    }
    let project = cwd.join(PROJECT_MANIFEST_FILE);
    if project.is_file() {
        return ManifestSource::Project(project);
    }
    ManifestSource::Builtin
}

/// Load and validate the manifest named by `source`
pub fn load_manifest(source: ManifestSource) -> DeployResult<LoadedManifest> {
    let (manifest, warnings) = match source.path() {
        Some(path) => load_with_warnings(path)?,
        None => (Manifest::builtin()?, Vec::new()),
    };
    tracing::debug!(
        source = %source,
        groups = manifest.groups.len(),
        entries = manifest.entry_count(),
        "loaded manifest"
    );

    Ok(LoadedManifest {
        manifest,
        source,
        warnings,
    })
}

/// Load a manifest file and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Manifest, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeployError::InvalidManifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse manifest text; `path` is only used for messages.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> DeployResult<(Manifest, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let manifest: Manifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidManifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    manifest.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key_path| {
            let key = key_path
                .split('.')
                .next_back()
                .unwrap_or(key_path.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                key,
                key_path,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((manifest, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scaffold",
        "group",
        "name",
        "source_root",
        "destination",
        "test_scripts",
        "files",
        "dirs",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
