//! Property-based tests for canonical path identity.

use std::rc::Rc;

use proptest::prelude::*;

use super::normalize::normalize_lexical;
use super::PathComparator;
use crate::expand::MemoryExpander;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _-]{1,12}"
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z]",
        prop::collection::vec(segment_strategy(), 1..6),
    )
        .prop_map(|(drive, parts)| format!(r"{drive}:\{}", parts.join(r"\")))
}

fn dotted_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            segment_strategy(),
        ],
        1..10,
    )
    .prop_map(|parts| format!(r"c:\{}", parts.join(r"\")))
}

fn comparator() -> PathComparator {
    PathComparator::new(Rc::new(MemoryExpander::new()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    /// Letter case never affects identity.
    #[test]
    fn case_insensitive(path in drive_path_strategy()) {
        let cmp = comparator();
        prop_assert!(cmp.equal(&path, &path.to_uppercase()).unwrap());
        prop_assert!(cmp.equal(&path, &path.to_lowercase()).unwrap());
    }

    /// One trailing separator never affects identity.
    #[test]
    fn trailing_separator_insensitive(path in drive_path_strategy()) {
        let cmp = comparator();
        prop_assert!(cmp.equal(&path, &format!(r"{path}\")).unwrap());
    }

    /// Normalizing twice changes nothing.
    #[test]
    fn normalization_idempotent(path in dotted_path_strategy()) {
        let once = normalize_lexical(&path);
        prop_assert_eq!(normalize_lexical(&once), once);
    }

    /// Rooted paths never keep `.` or `..` segments.
    #[test]
    fn rooted_paths_fully_resolved(path in dotted_path_strategy()) {
        let normalized = normalize_lexical(&path);
        for segment in normalized.split('\\') {
            prop_assert_ne!(segment, ".");
            prop_assert_ne!(segment, "..");
        }
    }

    /// A variable bound to a value compares equal to that value.
    #[test]
    fn expansion_precedes_comparison(value in drive_path_strategy(), tail in segment_strategy()) {
        let vars = Rc::new(MemoryExpander::new());
        vars.set("PROP_VAR", value.clone());
        let cmp = PathComparator::new(vars);
        prop_assert!(cmp.equal(&format!(r"%PROP_VAR%\{tail}"), &format!(r"{value}\{tail}")).unwrap());
    }
}
