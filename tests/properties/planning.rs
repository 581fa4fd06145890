//! Property tests for plan resolution.

use std::path::{Component, Path};

use proptest::prelude::*;

use refdeploy::{DeployMode, DeployPlan, Manifest};

fn dir_arg() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just("..".to_string()),
        Just(".".to_string()),
        proptest::string::string_regex("[A-Za-z0-9_-]{1,10}").unwrap(),
    ];
    proptest::collection::vec(segment, 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every planned path is absolute and clean, and every
    /// destination lands inside the game dir.
    #[test]
    fn property_plan_paths_are_resolved(
        game in dir_arg(),
        bin in dir_arg(),
        skip in any::<bool>(),
    ) {
        let manifest = Manifest::builtin().unwrap();
        let cwd = std::env::temp_dir();
        let plan = DeployPlan::build(
            &manifest,
            Path::new(&game),
            Path::new(&bin),
            &cwd,
            DeployMode::Copy,
            skip,
        );

        let expected = if skip { 14 } else { 22 };
        prop_assert_eq!(plan.entry_count(), expected);

        for entry in &plan.entries {
            for path in [&entry.source, &entry.destination] {
                prop_assert!(path.is_absolute());
                prop_assert!(path
                    .components()
                    .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
            }
            prop_assert!(entry.destination.starts_with(&plan.game_dir));
        }
        for dir in &plan.scaffold {
            prop_assert!(dir.starts_with(&plan.game_dir));
        }
    }
}
