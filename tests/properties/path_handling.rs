//! Property tests for path resolution and validation.

use std::path::{Component, Path, PathBuf};

use proptest::prelude::*;

use refdeploy::domain::value_objects::{absolutize, SafePath};

fn path_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap(),
    ]
}

fn relative_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(path_segment(), 0..=8).prop_map(|segments| segments.join("/"))
}

fn is_clean(path: &Path) -> bool {
    path.components()
        .all(|c| !matches!(c, Component::CurDir | Component::ParentDir))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolution against an absolute base is absolute and has
    /// no `.` or `..` components.
    #[test]
    fn property_absolutize_is_absolute_and_clean(
        relative in relative_path(),
        base_suffix in relative_path(),
    ) {
        let base = absolutize(Path::new(&base_suffix), &std::env::temp_dir());
        let resolved = absolutize(Path::new(&relative), &base);

        prop_assert!(resolved.is_absolute(), "{} is not absolute", resolved.display());
        prop_assert!(is_clean(&resolved), "{} has dot components", resolved.display());
    }

    /// PROPERTY: resolving twice changes nothing.
    #[test]
    fn property_absolutize_is_idempotent(relative in relative_path()) {
        let base = std::env::temp_dir();
        let once = absolutize(Path::new(&relative), &base);
        let twice = absolutize(&once, &base);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: paths without `..` stay under the base.
    #[test]
    fn property_plain_relative_stays_under_base(
        segments in proptest::collection::vec(
            proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
            1..=6,
        )
    ) {
        let base = absolutize(Path::new("work"), &std::env::temp_dir());
        let relative: PathBuf = segments.iter().collect();
        let resolved = absolutize(&relative, &base);
        prop_assert!(resolved.starts_with(&base));
    }

    /// PROPERTY: SafePath never panics, and accepted paths are relative and clean.
    #[test]
    fn property_safe_path_never_panics(s in "(?s).{0,128}") {
        if let Ok(safe) = SafePath::new(&s) {
            prop_assert!(!safe.as_path().is_absolute());
            prop_assert!(
                safe.as_path().components().all(|c| !matches!(c, Component::ParentDir))
            );
        }
    }
}
