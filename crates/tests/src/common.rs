use server::store::Store;

// Seeded user ids (see Store::seed).
pub const ADMIN_ID: i64 = 1;
pub const TA_ID: i64 = 2;
pub const STUDENT_JENNA: i64 = 3;
pub const STUDENT_SAM: i64 = 4;
pub const STUDENT_NOOR: i64 = 5;

// Seeded course ids.
pub const CS101: i64 = 1;
pub const CS205: i64 = 2;
pub const MATH140: i64 = 3;
pub const MATH220: i64 = 4;
pub const ENG210_FULL: i64 = 6;
pub const BIO150_CLOSED: i64 = 7;
pub const HIST101_ARCHIVED: i64 = 8;

/// Fresh seeded store for a test. Each test gets its own instance so
/// mutations never leak between tests.
pub fn seeded_store() -> Store {
    Store::seeded()
}
