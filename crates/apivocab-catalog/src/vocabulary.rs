//! # Vocabulary Rules
//!
//! The naming convention every canonical term must follow and the
//! platform-wide map of retired terms to their canonical replacements.
//!
//! Comparisons are case-sensitive byte comparisons: `Client_id` and
//! `client_id` are different terms, and only the latter is snake_case.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern a canonical term must match in full.
pub const SNAKE_CASE_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

#[allow(clippy::expect_used)]
static SNAKE_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SNAKE_CASE_PATTERN).expect("snake_case pattern is a valid regex"));

/// Retired term → canonical replacement, checked in this order.
///
/// An inventory set that declares both sides of a pair is in a half-migrated
/// state and gets a conflict error. A retired term on its own is tolerated.
pub const LEGACY_TERM_MAP: &[(&str, &str)] = &[
    ("cif_id", "client_id"),
    ("booking_center", "booking_center_code"),
];

/// Returns true if `term` is lowercase snake_case starting with a letter.
pub fn is_snake_case(term: &str) -> bool {
    SNAKE_CASE_RE.is_match(term)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything built from the allowed alphabet with a letter first passes.
        #[test]
        fn generated_snake_case_is_accepted(term in "[a-z][a-z0-9_]{0,30}") {
            prop_assert!(is_snake_case(&term));
        }

        /// A single uppercase letter anywhere is enough to fail.
        #[test]
        fn any_uppercase_is_rejected(
            prefix in "[a-z][a-z0-9_]{0,10}",
            upper in "[A-Z]",
            suffix in "[a-z0-9_]{0,10}",
        ) {
            let term = format!("{prefix}{upper}{suffix}");
            prop_assert!(!is_snake_case(&term));
        }

        /// Leading digits always fail.
        #[test]
        fn leading_digit_is_rejected(term in "[0-9][a-z0-9_]{0,20}") {
            prop_assert!(!is_snake_case(&term));
        }
    }
}
