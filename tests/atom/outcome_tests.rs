/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::{
    SwapOutcome,
    UpdateError,
};

#[test]
fn test_committed_accessors() {
    let outcome = SwapOutcome::Committed(7);
    assert!(outcome.is_committed());
    assert_eq!(*outcome.value(), 7);
    assert_eq!(outcome.clone().into_value(), 7);
    assert_eq!(outcome.committed(), Some(7));
}

#[test]
fn test_exhausted_accessors() {
    let outcome = SwapOutcome::Exhausted {
        candidate: "draft",
        attempts: 4,
    };
    assert!(!outcome.is_committed());
    assert_eq!(*outcome.value(), "draft");
    assert_eq!(outcome.clone().into_value(), "draft");
    assert_eq!(outcome.committed(), None);
}

#[test]
fn test_update_error_display() {
    let rejected: UpdateError<i32> = UpdateError::Rejected(1);
    let mismatch: UpdateError<i32> = UpdateError::Mismatch(2);

    assert_eq!(rejected.to_string(), "new value rejected by validator");
    assert_eq!(
        mismatch.to_string(),
        "current value does not match the expected value"
    );
}

#[test]
fn test_update_error_into_inner() {
    assert!(UpdateError::Rejected(1).is_rejected());
    assert!(!UpdateError::Mismatch(1).is_rejected());
    assert_eq!(UpdateError::Rejected(1).into_inner(), 1);
    assert_eq!(UpdateError::Mismatch(2).into_inner(), 2);
}

#[test]
fn test_update_error_is_std_error() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    let err = UpdateError::Rejected(String::from("x"));
    assert_eq!(describe(&err), "new value rejected by validator");
}
