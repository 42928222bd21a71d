use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn stats_reflect_seed_data() {
    let store = common::seeded_store();
    let stats = store.stats();

    assert_eq!(stats.total_users, 5);
    assert_eq!(stats.total_courses, 8);
    assert_eq!(stats.open_courses, 6);
    assert_eq!(stats.active_enrollments, 5);
}

#[test]
fn recent_users_are_newest_first() {
    let store = common::seeded_store();
    let stats = store.stats();

    let ids: Vec<i64> = stats.recent_users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![5, 4, 3, 2, 1]);
}

#[test]
fn stats_track_enrollment_changes() {
    let mut store = common::seeded_store();
    store
        .drop_course(common::STUDENT_JENNA, common::CS101)
        .unwrap();

    let stats = store.stats();
    assert_eq!(stats.active_enrollments, 4);
}

#[test]
fn list_users_exposes_roles_as_strings() {
    let store = common::seeded_store();
    let users = store.list_users();
    let admin = users.iter().find(|u| u.id == common::ADMIN_ID).unwrap();
    assert_eq!(admin.role, "admin");
    let ta = users.iter().find(|u| u.id == common::TA_ID).unwrap();
    assert_eq!(ta.role, "ta");
}
