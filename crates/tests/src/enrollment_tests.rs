use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, EnrollmentStatus};

use crate::common;

#[test]
fn enroll_creates_active_enrollment_and_bumps_count() {
    let mut store = common::seeded_store();
    let before = store.get_course(common::MATH220).unwrap().enrolled;

    let enrollment = store
        .enroll(common::STUDENT_NOOR, common::MATH220)
        .unwrap();
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
    assert_eq!(enrollment.course_id, common::MATH220);
    assert_eq!(enrollment.user_id, common::STUDENT_NOOR);

    let after = store.get_course(common::MATH220).unwrap().enrolled;
    assert_eq!(after, before + 1);
}

#[test]
fn duplicate_enrollment_is_a_conflict() {
    let mut store = common::seeded_store();
    // Jenna is already enrolled in CS101 via seed data.
    let err = store
        .enroll(common::STUDENT_JENNA, common::CS101)
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "Already enrolled in CS101");

    // The count did not move.
    assert_eq!(store.get_course(common::CS101).unwrap().enrolled, 2);
}

#[test]
fn full_course_rejects_new_enrollments() {
    let mut store = common::seeded_store();
    let err = store
        .enroll(common::STUDENT_JENNA, common::ENG210_FULL)
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn closed_course_rejects_new_enrollments() {
    let mut store = common::seeded_store();
    let err = store
        .enroll(common::STUDENT_JENNA, common::BIO150_CLOSED)
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn unknown_course_is_not_found() {
    let mut store = common::seeded_store();
    let err = store.enroll(common::STUDENT_JENNA, 999).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn drop_marks_enrollment_dropped_and_frees_the_seat() {
    let mut store = common::seeded_store();

    let dropped = store
        .drop_course(common::STUDENT_JENNA, common::CS101)
        .unwrap();
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);
    assert_eq!(store.get_course(common::CS101).unwrap().enrolled, 1);

    // No longer listed under active enrollments.
    let remaining = store.enrollments_for(common::STUDENT_JENNA);
    assert!(remaining.iter().all(|e| e.course.id != common::CS101));
}

#[test]
fn drop_without_active_enrollment_is_not_found() {
    let mut store = common::seeded_store();
    let err = store
        .drop_course(common::STUDENT_JENNA, common::MATH220)
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn reenrolling_after_a_drop_is_allowed() {
    let mut store = common::seeded_store();

    store
        .drop_course(common::STUDENT_JENNA, common::CS101)
        .unwrap();
    let again = store.enroll(common::STUDENT_JENNA, common::CS101).unwrap();

    assert_eq!(again.status, EnrollmentStatus::Active);
    assert_eq!(store.get_course(common::CS101).unwrap().enrolled, 2);

    // Re-activation reuses the original enrollment row.
    let active = store.enrollments_for(common::STUDENT_JENNA);
    let cs101: Vec<_> = active
        .iter()
        .filter(|e| e.course.id == common::CS101)
        .collect();
    assert_eq!(cs101.len(), 1);
}

#[test]
fn dropping_a_full_course_reopens_it() {
    let mut store = common::seeded_store();

    assert!(!store.get_course(common::ENG210_FULL).unwrap().has_seats());
    store
        .drop_course(common::STUDENT_SAM, common::ENG210_FULL)
        .unwrap();
    assert!(store.get_course(common::ENG210_FULL).unwrap().has_seats());

    // Someone else can now take the seat.
    store
        .enroll(common::STUDENT_NOOR, common::ENG210_FULL)
        .unwrap();
    assert!(!store.get_course(common::ENG210_FULL).unwrap().has_seats());
}

#[test]
fn enrollments_for_joins_course_data() {
    let store = common::seeded_store();
    let enrolled = store.enrollments_for(common::STUDENT_JENNA);
    let codes: Vec<&str> = enrolled.iter().map(|e| e.course.code.as_str()).collect();
    assert_eq!(codes, vec!["CS101", "MATH140"]);
}
