//! Custom Test Assertions
//!
//! Assertion helpers for `ClaimsError` outcomes that print the actual error
//! when the expectation does not hold.

use std::fmt::Debug;

use domain_claims::{ClaimsError, ReferenceKind};

/// Asserts that a result failed because the record already exists
pub fn assert_already_exists<T: Debug>(result: &Result<T, ClaimsError>) {
    assert!(
        matches!(result, Err(ClaimsError::AlreadyExists { .. })),
        "Expected AlreadyExists, got {:?}",
        result
    );
}

/// Asserts that a result failed because the target record is absent
pub fn assert_not_found<T: Debug>(result: &Result<T, ClaimsError>) {
    assert!(
        matches!(result, Err(ClaimsError::NotFound { .. })),
        "Expected NotFound, got {:?}",
        result
    );
}

/// Asserts that a result failed because a referenced record of `kind` is absent
pub fn assert_reference_missing<T: Debug>(result: &Result<T, ClaimsError>, kind: ReferenceKind) {
    assert!(
        matches!(result, Err(ClaimsError::ReferenceNotFound { kind: k, .. }) if *k == kind),
        "Expected ReferenceNotFound({}), got {:?}",
        kind,
        result
    );
}

/// Asserts that a result failed the coverage check
pub fn assert_coverage_exceeded<T: Debug>(result: &Result<T, ClaimsError>) {
    assert!(
        matches!(result, Err(ClaimsError::CoverageExceeded { .. })),
        "Expected CoverageExceeded, got {:?}",
        result
    );
}

/// Asserts that a result failed for a reason the caller can fix
pub fn assert_client_error<T: Debug>(result: &Result<T, ClaimsError>) {
    match result {
        Err(e) if e.is_client_error() => {}
        other => panic!("Expected a client error, got {:?}", other),
    }
}
