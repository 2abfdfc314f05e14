//! # Listkeeper Testing
//!
//! Testing utilities and helpers for Listkeeper reducers.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for any [`Reducer`](listkeeper_core::Reducer)
//! - Outcome assertion helpers
//! - `proptest` strategies for domain inputs
//!
//! ## Example
//!
//! ```
//! use listkeeper_core::{ListError, ListsAction, ListsReducer, ListsState};
//! use listkeeper_testing::ReducerTest;
//!
//! ReducerTest::new(ListsReducer::new())
//!     .given_state(ListsState::new())
//!     .when_action(ListsAction::CreateList { name: String::new() })
//!     .then_error(|error| assert_eq!(*error, ListError::InvalidListName))
//!     .then_state_unchanged()
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Property-based testing utilities using proptest.
#[allow(clippy::expect_used)] // Strategy construction is test-only
pub mod properties {
    use listkeeper_core::lists::NAME_MAX_CHARS;
    use proptest::prelude::*;

    /// Names that pass length validation: 1 to 100 visible characters
    pub fn valid_name() -> impl Strategy<Value = String> {
        let pattern = format!("[a-zA-Z0-9][a-zA-Z0-9 ]{{0,{}}}", NAME_MAX_CHARS - 1);
        proptest::string::string_regex(&pattern)
            .expect("valid regex")
            .prop_map(|name| name.trim_end().to_string())
    }

    /// Names that fail length validation: blank, or longer than 100 characters
    pub fn invalid_name() -> impl Strategy<Value = String> {
        let too_long = format!("[a-z]{{{},{}}}", NAME_MAX_CHARS + 1, NAME_MAX_CHARS + 50);
        prop_oneof![
            proptest::string::string_regex("[ \t]{0,5}").expect("valid regex"),
            proptest::string::string_regex(&too_long).expect("valid regex"),
        ]
    }
}
