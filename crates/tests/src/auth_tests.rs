use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[test]
fn authenticate_with_valid_credentials() {
    let store = common::seeded_store();
    let user = store
        .authenticate("jenna@studyhub.edu", "studyhub123")
        .unwrap();
    assert_eq!(user.id, common::STUDENT_JENNA);
    assert_eq!(user.role, "student");
    assert_eq!(user.display_name, "Jenna Ortiz");
}

#[test]
fn authenticate_is_case_insensitive_on_email() {
    let store = common::seeded_store();
    let user = store
        .authenticate("Priya@StudyHub.edu", "studyhub123")
        .unwrap();
    assert_eq!(user.id, common::ADMIN_ID);
    assert_eq!(user.role, "admin");
}

#[test]
fn authenticate_rejects_wrong_password() {
    let store = common::seeded_store();
    let err = store
        .authenticate("jenna@studyhub.edu", "wrong-password")
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn authenticate_rejects_unknown_email_with_same_message() {
    let store = common::seeded_store();
    let err = store
        .authenticate("nobody@studyhub.edu", "studyhub123")
        .unwrap_err();
    // Same message as a wrong password, so the response doesn't reveal
    // which emails exist.
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[test]
fn auth_user_lookup_by_id() {
    let store = common::seeded_store();
    let user = store.auth_user(common::TA_ID).unwrap();
    assert_eq!(user.email, "marcus@studyhub.edu");
    assert_eq!(user.role, "ta");

    assert!(store.auth_user(999).is_none());
}
