use chrono::Utc;
use shared_types::{
    AppError, AuthUser, Course, CourseStatus, DashboardStats, EnrolledCourse, Enrollment,
    EnrollmentStatus, Role, TeachingAssignment, User,
};
use std::sync::OnceLock;
use tokio::sync::RwLock;

/// A user account in the store.
///
/// Credentials are demo data only — no real accounts exist and nothing is
/// persisted across restarts, so passwords are held in the clear.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub password: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

/// TA-to-course assignment.
#[derive(Debug, Clone)]
struct CourseAssistant {
    course_id: i64,
    user_id: i64,
}

/// In-memory application data. StudyHub has no database: catalog and
/// enrollment data is seeded at startup and mutated in place.
#[derive(Debug, Default)]
pub struct Store {
    users: Vec<UserRecord>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    assistants: Vec<CourseAssistant>,
    next_enrollment_id: i64,
}

/// Number of users shown in the admin dashboard's recent list.
const RECENT_USERS: usize = 5;

impl Store {
    pub fn empty() -> Self {
        Self {
            next_enrollment_id: 1,
            ..Self::default()
        }
    }

    /// Build a store populated with the demo campus data set.
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        store.seed();
        store
    }

    fn seed(&mut self) {
        let t0 = "2025-08-18T09:00:00+00:00";
        let user = |id: i64, email: &str, name: &str, role: Role| UserRecord {
            id,
            email: email.to_string(),
            display_name: name.to_string(),
            role,
            password: "studyhub123".to_string(),
            avatar_url: None,
            created_at: t0.to_string(),
        };
        self.users = vec![
            user(1, "priya@studyhub.edu", "Priya Raman", Role::Admin),
            user(2, "marcus@studyhub.edu", "Marcus Webb", Role::Ta),
            user(3, "jenna@studyhub.edu", "Jenna Ortiz", Role::Student),
            user(4, "sam@studyhub.edu", "Sam Liu", Role::Student),
            user(5, "noor@studyhub.edu", "Noor Haddad", Role::Student),
        ];

        let course = |id: i64,
                      code: &str,
                      title: &str,
                      description: &str,
                      department: &str,
                      instructor: &str,
                      credits: u8,
                      capacity: u32,
                      enrolled: u32,
                      status: CourseStatus| Course {
            id,
            code: code.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            department: department.to_string(),
            instructor: instructor.to_string(),
            credits,
            capacity,
            enrolled,
            status,
        };
        self.courses = vec![
            course(
                1,
                "CS101",
                "Introduction to Computer Science",
                "Programming fundamentals, problem decomposition, and basic data structures.",
                "Computer Science",
                "Dr. Elena Reyes",
                3,
                40,
                2,
                CourseStatus::Open,
            ),
            course(
                2,
                "CS205",
                "Data Structures and Algorithms",
                "Trees, graphs, hashing, and asymptotic analysis.",
                "Computer Science",
                "Dr. Elena Reyes",
                4,
                35,
                0,
                CourseStatus::Open,
            ),
            course(
                3,
                "MATH140",
                "Calculus I",
                "Limits, derivatives, and integrals of single-variable functions.",
                "Mathematics",
                "Prof. Alan Okafor",
                4,
                60,
                1,
                CourseStatus::Open,
            ),
            course(
                4,
                "MATH220",
                "Linear Algebra",
                "Vector spaces, linear maps, eigenvalues, and applications.",
                "Mathematics",
                "Prof. Alan Okafor",
                3,
                45,
                0,
                CourseStatus::Open,
            ),
            course(
                5,
                "PHYS110",
                "Mechanics",
                "Newtonian mechanics with calculus, from kinematics to rotation.",
                "Physics",
                "Dr. Sofia Brandt",
                4,
                50,
                1,
                CourseStatus::Open,
            ),
            course(
                6,
                "ENG210",
                "Technical Writing",
                "Writing clear documentation, reports, and proposals.",
                "English",
                "Prof. David Chen",
                2,
                1,
                1,
                CourseStatus::Open,
            ),
            course(
                7,
                "BIO150",
                "Cell Biology",
                "Structure and function of the cell.",
                "Biology",
                "Dr. Maria Santos",
                3,
                30,
                0,
                CourseStatus::Closed,
            ),
            course(
                8,
                "HIST101",
                "World History to 1500",
                "Survey of early world civilizations.",
                "History",
                "Prof. Ingrid Vass",
                3,
                30,
                0,
                CourseStatus::Archived,
            ),
        ];

        let t1 = "2025-08-25T14:30:00+00:00";
        let enrollment = |id: i64, course_id: i64, user_id: i64| Enrollment {
            id,
            course_id,
            user_id,
            status: EnrollmentStatus::Active,
            enrolled_at: t1.to_string(),
        };
        self.enrollments = vec![
            enrollment(1, 1, 3), // Jenna in CS101
            enrollment(2, 3, 3), // Jenna in MATH140
            enrollment(3, 1, 4), // Sam in CS101
            enrollment(4, 6, 4), // Sam fills ENG210
            enrollment(5, 5, 5), // Noor in PHYS110
        ];
        self.next_enrollment_id = 6;

        self.assistants = vec![
            CourseAssistant {
                course_id: 1,
                user_id: 2,
            },
            CourseAssistant {
                course_id: 2,
                user_id: 2,
            },
        ];
    }

    fn auth_user_from(record: &UserRecord) -> AuthUser {
        AuthUser {
            id: record.id,
            email: record.email.clone(),
            display_name: record.display_name.clone(),
            role: record.role.as_str().to_string(),
            avatar_url: record.avatar_url.clone(),
        }
    }

    /// Check demo credentials. The failure message never reveals whether
    /// the email exists.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
            .map(Self::auth_user_from)
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))
    }

    pub fn auth_user(&self, user_id: i64) -> Option<AuthUser> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(Self::auth_user_from)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|u| User {
                id: u.id,
                email: u.email.clone(),
                display_name: u.display_name.clone(),
                role: u.role.as_str().to_string(),
                created_at: u.created_at.clone(),
            })
            .collect()
    }

    pub fn list_courses(&self) -> Vec<Course> {
        self.courses.clone()
    }

    pub fn get_course(&self, course_id: i64) -> Result<Course, AppError> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", course_id)))
    }

    fn active_enrollment_index(&self, user_id: i64, course_id: i64) -> Option<usize> {
        self.enrollments.iter().position(|e| {
            e.user_id == user_id
                && e.course_id == course_id
                && e.status == EnrollmentStatus::Active
        })
    }

    /// Enroll a user in a course. Re-activating a previously dropped
    /// enrollment is allowed; double-enrolling and overfilling are conflicts.
    pub fn enroll(&mut self, user_id: i64, course_id: i64) -> Result<Enrollment, AppError> {
        let course_index = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", course_id)))?;

        if self.active_enrollment_index(user_id, course_id).is_some() {
            let code = self.courses[course_index].code.clone();
            return Err(AppError::conflict(format!("Already enrolled in {}", code)));
        }
        if !self.courses[course_index].has_seats() {
            let code = self.courses[course_index].code.clone();
            return Err(AppError::conflict(format!(
                "{} is not accepting enrollments",
                code
            )));
        }

        let now = Utc::now().to_rfc3339();
        let enrollment = if let Some(index) = self
            .enrollments
            .iter()
            .position(|e| e.user_id == user_id && e.course_id == course_id)
        {
            let existing = &mut self.enrollments[index];
            existing.status = EnrollmentStatus::Active;
            existing.enrolled_at = now;
            existing.clone()
        } else {
            let enrollment = Enrollment {
                id: self.next_enrollment_id,
                course_id,
                user_id,
                status: EnrollmentStatus::Active,
                enrolled_at: now,
            };
            self.next_enrollment_id += 1;
            self.enrollments.push(enrollment.clone());
            enrollment
        };

        self.courses[course_index].enrolled += 1;
        Ok(enrollment)
    }

    /// Drop an active enrollment.
    pub fn drop_course(&mut self, user_id: i64, course_id: i64) -> Result<Enrollment, AppError> {
        let index = self
            .active_enrollment_index(user_id, course_id)
            .ok_or_else(|| AppError::not_found("No active enrollment for this course"))?;

        self.enrollments[index].status = EnrollmentStatus::Dropped;
        let dropped = self.enrollments[index].clone();

        if let Some(course) = self.courses.iter_mut().find(|c| c.id == course_id) {
            course.enrolled = course.enrolled.saturating_sub(1);
        }
        Ok(dropped)
    }

    /// All active enrollments for a user, joined with their courses.
    pub fn enrollments_for(&self, user_id: i64) -> Vec<EnrolledCourse> {
        self.enrollments
            .iter()
            .filter(|e| e.user_id == user_id && e.status == EnrollmentStatus::Active)
            .filter_map(|e| {
                self.courses
                    .iter()
                    .find(|c| c.id == e.course_id)
                    .map(|c| EnrolledCourse {
                        enrollment: e.clone(),
                        course: c.clone(),
                    })
            })
            .collect()
    }

    /// Courses the user assists, with their live enrollment counts.
    pub fn teaching_assignments(&self, user_id: i64) -> Vec<TeachingAssignment> {
        self.assistants
            .iter()
            .filter(|a| a.user_id == user_id)
            .filter_map(|a| self.courses.iter().find(|c| c.id == a.course_id))
            .map(|course| TeachingAssignment {
                course: course.clone(),
                active_enrollments: self
                    .enrollments
                    .iter()
                    .filter(|e| {
                        e.course_id == course.id && e.status == EnrollmentStatus::Active
                    })
                    .count() as i64,
            })
            .collect()
    }

    /// Aggregate counts for the admin dashboard.
    pub fn stats(&self) -> DashboardStats {
        let recent_users = {
            let mut users = self.list_users();
            users.sort_by(|a, b| b.id.cmp(&a.id));
            users.truncate(RECENT_USERS);
            users
        };
        DashboardStats {
            total_users: self.users.len() as i64,
            total_courses: self.courses.len() as i64,
            open_courses: self
                .courses
                .iter()
                .filter(|c| c.status == CourseStatus::Open)
                .count() as i64,
            active_enrollments: self
                .enrollments
                .iter()
                .filter(|e| e.status == EnrollmentStatus::Active)
                .count() as i64,
            recent_users,
        }
    }
}

static STORE: OnceLock<RwLock<Store>> = OnceLock::new();

/// Get or initialize the global store.
///
/// Used by Dioxus server functions which share a single long-lived runtime.
/// Tests construct their own [`Store`] instead of touching this global.
pub fn store() -> &'static RwLock<Store> {
    STORE.get_or_init(|| {
        let store = if crate::config::config().seed_demo_data {
            Store::seeded()
        } else {
            Store::empty()
        };
        RwLock::new(store)
    })
}
