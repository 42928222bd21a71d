use serde::{Deserialize, Serialize};

/// Publication status of a catalog entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CourseStatus {
    #[default]
    Open,
    Closed,
    Archived,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Open => "open",
            CourseStatus::Closed => "closed",
            CourseStatus::Archived => "archived",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "closed" => CourseStatus::Closed,
            "archived" => CourseStatus::Archived,
            _ => CourseStatus::Open,
        }
    }
}

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    /// Short catalog code, e.g. "CS101".
    pub code: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub instructor: String,
    pub credits: u8,
    pub capacity: u32,
    pub enrolled: u32,
    pub status: CourseStatus,
}

impl Course {
    /// Whether a new enrollment would fit.
    pub fn has_seats(&self) -> bool {
        self.status == CourseStatus::Open && self.enrolled < self.capacity
    }
}

/// Lifecycle of an enrollment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Dropped,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Dropped => "dropped",
        }
    }
}

/// A user's enrollment in a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: i64,
    pub user_id: i64,
    pub status: EnrollmentStatus,
    pub enrolled_at: String,
}

/// Enrollment joined with its course, as shown on My Courses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrolledCourse {
    pub enrollment: Enrollment,
    pub course: Course,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(enrolled: u32, capacity: u32, status: CourseStatus) -> Course {
        Course {
            id: 1,
            code: "CS101".into(),
            title: "Intro to Computer Science".into(),
            description: "Foundations".into(),
            department: "Computer Science".into(),
            instructor: "Dr. Reyes".into(),
            credits: 3,
            capacity,
            enrolled,
            status,
        }
    }

    #[test]
    fn open_course_with_space_has_seats() {
        assert!(course(10, 30, CourseStatus::Open).has_seats());
    }

    #[test]
    fn full_course_has_no_seats() {
        assert!(!course(30, 30, CourseStatus::Open).has_seats());
    }

    #[test]
    fn closed_course_has_no_seats_even_when_empty() {
        assert!(!course(0, 30, CourseStatus::Closed).has_seats());
        assert!(!course(0, 30, CourseStatus::Archived).has_seats());
    }

    #[test]
    fn course_status_parse_unknown_defaults_to_open() {
        assert_eq!(CourseStatus::from_str_or_default("open"), CourseStatus::Open);
        assert_eq!(
            CourseStatus::from_str_or_default("CLOSED"),
            CourseStatus::Closed
        );
        assert_eq!(CourseStatus::from_str_or_default("???"), CourseStatus::Open);
    }

    #[test]
    fn enrollment_serialization_roundtrip() {
        let e = Enrollment {
            id: 9,
            course_id: 1,
            user_id: 4,
            status: EnrollmentStatus::Active,
            enrolled_at: "2025-09-01T10:00:00Z".into(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(serde_json::from_str::<Enrollment>(&json).unwrap(), e);
    }
}
