use shared_types::Role;

use crate::routes::Route;

/// A single navigation entry in the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

impl NavLink {
    fn new(route: Route, label: &'static str) -> Self {
        Self { route, label }
    }
}

/// The sidebar links for a role, in display order.
///
/// Pure lookup table. `Unknown` yields no links — the shell renders an
/// empty menu rather than erroring.
pub fn links_for(role: Role) -> Vec<NavLink> {
    match role {
        Role::Student => vec![
            NavLink::new(Route::StudentDashboard {}, "Dashboard"),
            NavLink::new(Route::CourseCatalog {}, "Course Catalog"),
            NavLink::new(Route::MyCourses {}, "My Courses"),
        ],
        Role::Ta => vec![
            NavLink::new(Route::TaDashboard {}, "Dashboard"),
            NavLink::new(Route::CourseCatalog {}, "Course Catalog"),
            NavLink::new(Route::MyCourses {}, "My Courses"),
        ],
        Role::Admin => vec![
            NavLink::new(Route::AdminDashboard {}, "Dashboard"),
            NavLink::new(Route::CourseCatalog {}, "Course Catalog"),
            NavLink::new(Route::AdminUsers {}, "Users"),
        ],
        Role::Unknown => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_has_no_links() {
        assert!(links_for(Role::Unknown).is_empty());
    }

    #[test]
    fn every_known_role_leads_with_its_dashboard() {
        assert_eq!(
            links_for(Role::Student)[0].route,
            Route::StudentDashboard {}
        );
        assert_eq!(links_for(Role::Ta)[0].route, Route::TaDashboard {});
        assert_eq!(links_for(Role::Admin)[0].route, Route::AdminDashboard {});
    }

    #[test]
    fn admin_sees_user_management() {
        let links = links_for(Role::Admin);
        assert!(links.iter().any(|l| l.route == Route::AdminUsers {}));
    }

    #[test]
    fn students_do_not_see_user_management() {
        let links = links_for(Role::Student);
        assert!(!links.iter().any(|l| l.route == Route::AdminUsers {}));
    }

    #[test]
    fn link_order_is_stable() {
        let labels: Vec<&str> = links_for(Role::Student).iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Dashboard", "Course Catalog", "My Courses"]);
    }
}
