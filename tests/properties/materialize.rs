//! Property tests for artifact materialization.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use tempfile::tempdir;

use apexdeploy::infrastructure::materializer::{CLASSES_DIR, METADATA_FILE};
use apexdeploy::{materialize, ArtifactSet, CodeEntry};

fn class_name() -> impl Strategy<Value = String> {
    // Small alphabet so names recur across apex and tests.
    proptest::string::string_regex("[A-C][a-c]{0,2}").unwrap()
}

fn entry() -> impl Strategy<Value = CodeEntry> {
    (
        proptest::option::weighted(0.85, class_name()),
        proptest::option::weighted(0.85, "[ -~]{1,40}"),
    )
        .prop_map(|(name, content)| CodeEntry { name, content })
}

fn artifact_set() -> impl Strategy<Value = ArtifactSet> {
    (
        proptest::collection::vec(entry(), 0..8),
        proptest::collection::vec(entry(), 0..8),
    )
        .prop_map(|(apex, tests)| ArtifactSet {
            apex,
            tests,
            metadata: None,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one content file and one descriptor per distinct complete name,
    /// holding the content of the last entry with that name.
    #[test]
    fn property_one_pair_per_distinct_name(set in artifact_set()) {
        let dir = tempdir().unwrap();

        let summary = materialize(&set, dir.path()).unwrap();

        let complete: Vec<(&str, &str)> = set.entries().filter_map(CodeEntry::complete).collect();
        let mut last: HashMap<&str, &str> = HashMap::new();
        for &(name, content) in &complete {
            last.insert(name, content);
        }
        let distinct: HashSet<&str> = last.keys().copied().collect();

        prop_assert_eq!(summary.classes, complete.len());
        prop_assert_eq!(summary.descriptors, distinct.len());
        prop_assert_eq!(summary.skipped, set.apex.len() + set.tests.len() - complete.len());

        let classes_dir = dir.path().join(CLASSES_DIR);
        let files: HashSet<String> = std::fs::read_dir(&classes_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        prop_assert_eq!(files.len(), distinct.len() * 2);

        for (&name, &content) in &last {
            let written = std::fs::read_to_string(classes_dir.join(format!("{name}.cls"))).unwrap();
            prop_assert_eq!(written.as_str(), content);
            let meta_name = format!("{name}.cls-meta.xml");
            prop_assert!(files.contains(&meta_name));
        }

        prop_assert!(dir.path().join(METADATA_FILE).is_file());
    }
}
