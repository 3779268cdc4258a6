//! Tests for core_kernel error types

use core_kernel::error::StoreError;

#[test]
fn test_store_error_already_exists() {
    let error = StoreError::already_exists("Policyholder", 1);

    match &error {
        StoreError::AlreadyExists { entity, id } => {
            assert_eq!(*entity, "Policyholder");
            assert_eq!(id, "1");
        }
        _ => panic!("Expected AlreadyExists error"),
    }
    assert!(error.is_already_exists());
    assert_eq!(error.to_string(), "Policyholder with id 1 already exists");
}

#[test]
fn test_store_error_not_found() {
    let error = StoreError::not_found("Claim", "CLM-9");

    assert!(error.is_not_found());
    assert!(!error.is_already_exists());
    assert_eq!(error.to_string(), "Claim with id CLM-9 not found");
}

#[test]
fn test_store_error_backend() {
    let error = StoreError::backend("pool timed out");

    assert!(!error.is_not_found());
    assert!(!error.is_already_exists());
    assert!(error.to_string().contains("pool timed out"));
    assert!(std::error::Error::source(&error).is_none());
}

#[test]
fn test_store_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreError>();
}
