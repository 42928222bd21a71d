use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, CourseStatus};

use crate::common;

#[test]
fn catalog_lists_all_seeded_courses() {
    let store = common::seeded_store();
    let courses = store.list_courses();
    assert_eq!(courses.len(), 8);
}

#[test]
fn get_course_returns_full_record() {
    let store = common::seeded_store();
    let course = store.get_course(common::CS101).unwrap();
    assert_eq!(course.code, "CS101");
    assert_eq!(course.department, "Computer Science");
    assert_eq!(course.status, CourseStatus::Open);
    assert_eq!(course.enrolled, 2);
}

#[test]
fn get_course_unknown_id_is_not_found() {
    let store = common::seeded_store();
    let err = store.get_course(999).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn seeded_enrolled_counts_match_seed_enrollments() {
    let store = common::seeded_store();
    assert_eq!(store.get_course(common::CS101).unwrap().enrolled, 2);
    assert_eq!(store.get_course(common::MATH140).unwrap().enrolled, 1);
    assert_eq!(store.get_course(common::MATH220).unwrap().enrolled, 0);
    assert_eq!(store.get_course(common::ENG210_FULL).unwrap().enrolled, 1);
}

#[test]
fn full_open_course_reports_no_seats() {
    let store = common::seeded_store();
    let full = store.get_course(common::ENG210_FULL).unwrap();
    assert_eq!(full.enrolled, full.capacity);
    assert!(!full.has_seats());
}

#[test]
fn closed_and_archived_courses_report_no_seats() {
    let store = common::seeded_store();
    assert!(!store.get_course(common::BIO150_CLOSED).unwrap().has_seats());
    assert!(!store
        .get_course(common::HIST101_ARCHIVED)
        .unwrap()
        .has_seats());
}

#[test]
fn teaching_assignments_for_the_seeded_ta() {
    let store = common::seeded_store();
    let assignments = store.teaching_assignments(common::TA_ID);
    let codes: Vec<&str> = assignments
        .iter()
        .map(|a| a.course.code.as_str())
        .collect();
    assert_eq!(codes, vec!["CS101", "CS205"]);
    assert_eq!(assignments[0].active_enrollments, 2);
    assert_eq!(assignments[1].active_enrollments, 0);
}

#[test]
fn students_have_no_teaching_assignments() {
    let store = common::seeded_store();
    assert!(store.teaching_assignments(common::STUDENT_JENNA).is_empty());
}
