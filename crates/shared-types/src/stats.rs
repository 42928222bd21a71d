use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::user::User;

/// Aggregated statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_courses: i64,
    pub open_courses: i64,
    pub active_enrollments: i64,
    pub recent_users: Vec<User>,
}

/// Per-course enrollment counts for the TA dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeachingAssignment {
    pub course: Course,
    pub active_enrollments: i64,
}
