use dioxus::prelude::*;
use shared_types::Role;

use crate::routes::Route;
use crate::session::{use_session, SessionUser};

/// Outcome of a guard evaluation for a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to render the wrapped view.
    Render,
    /// Not signed in: go to login, carrying the intended location so the
    /// login flow can return there afterwards.
    RedirectToLogin { return_to: String },
    /// Signed in with the wrong role: go to that role's landing page.
    RedirectToRoleHome { path: &'static str },
}

/// Decide render-vs-redirect for a protected view.
///
/// Pure function of (session user, required roles, current location); every
/// navigation re-evaluates from scratch. An empty `required` slice means any
/// authenticated user is authorized. The unauthenticated case is checked
/// first, then role membership.
pub fn evaluate(user: Option<&SessionUser>, required: &[Role], location: &str) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::RedirectToLogin {
            return_to: location.to_string(),
        };
    };

    if required.is_empty() || required.contains(&user.role) {
        return GuardDecision::Render;
    }

    GuardDecision::RedirectToRoleHome {
        path: user.role.landing_path(),
    }
}

/// Apply a guard decision in a layout position.
///
/// Redirects replace the history entry so back-navigation cannot land on
/// the blocked page.
pub fn apply(decision: GuardDecision) -> Element {
    match decision {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin { return_to } => {
            navigator().replace(Route::Login {
                redirect: Some(return_to),
            });
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectToRoleHome { path } => {
            navigator().replace(NavigationTarget::<Route>::External(path.to_string()));
            rsx! {
                div { class: "guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

/// Evaluate the guard for the current route against a role set.
fn guard_layout(required: &[Role]) -> Element {
    let session = use_session();
    let route: Route = use_route();
    let location = route.to_string();

    apply(evaluate(
        session.current_user().as_ref(),
        required,
        &location,
    ))
}

/// Layout guard for the student area.
#[component]
pub fn StudentGuard() -> Element {
    guard_layout(&[Role::Student])
}

/// Layout guard for the TA area.
#[component]
pub fn TaGuard() -> Element {
    guard_layout(&[Role::Ta])
}

/// Layout guard for the admin area.
#[component]
pub fn AdminGuard() -> Element {
    guard_layout(&[Role::Admin])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            email: "test@studyhub.edu".to_string(),
            role,
        }
    }

    #[test]
    fn unauthenticated_redirects_to_login_with_exact_location() {
        for required in [&[][..], &[Role::Admin][..], &[Role::Ta, Role::Student][..]] {
            let decision = evaluate(None, required, "/admin/users");
            assert_eq!(
                decision,
                GuardDecision::RedirectToLogin {
                    return_to: "/admin/users".to_string()
                }
            );
        }
    }

    #[test]
    fn matching_role_renders() {
        let admin = user(Role::Admin);
        assert_eq!(
            evaluate(Some(&admin), &[Role::Admin], "/admin/dashboard"),
            GuardDecision::Render
        );
        let student = user(Role::Student);
        assert_eq!(
            evaluate(Some(&student), &[Role::Ta, Role::Student], "/courses"),
            GuardDecision::Render
        );
    }

    #[test]
    fn empty_required_set_means_any_authenticated_role() {
        for role in [Role::Admin, Role::Ta, Role::Student, Role::Unknown] {
            let u = user(role);
            assert_eq!(evaluate(Some(&u), &[], "/courses"), GuardDecision::Render);
        }
    }

    #[test]
    fn wrong_role_redirects_to_role_home() {
        let student = user(Role::Student);
        assert_eq!(
            evaluate(Some(&student), &[Role::Admin], "/admin/users"),
            GuardDecision::RedirectToRoleHome {
                path: "/student/dashboard"
            }
        );
        let ta = user(Role::Ta);
        assert_eq!(
            evaluate(Some(&ta), &[Role::Admin], "/admin/users"),
            GuardDecision::RedirectToRoleHome {
                path: "/ta/dashboard"
            }
        );
    }

    #[test]
    fn unknown_role_falls_back_to_generic_dashboard() {
        let unknown = user(Role::Unknown);
        assert_eq!(
            evaluate(Some(&unknown), &[Role::Admin], "/admin/dashboard"),
            GuardDecision::RedirectToRoleHome { path: "/dashboard" }
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let student = user(Role::Student);
        let first = evaluate(Some(&student), &[Role::Admin], "/admin/users");
        let second = evaluate(Some(&student), &[Role::Admin], "/admin/users");
        assert_eq!(first, second);
    }

    #[test]
    fn scenario_anonymous_on_admin_users() {
        assert_eq!(
            evaluate(None, &[Role::Admin], "/admin/users"),
            GuardDecision::RedirectToLogin {
                return_to: "/admin/users".to_string()
            }
        );
    }

    #[test]
    fn scenario_student_on_admin_route() {
        let student = user(Role::Student);
        assert_eq!(
            evaluate(Some(&student), &[Role::Admin], "/admin/dashboard"),
            GuardDecision::RedirectToRoleHome {
                path: "/student/dashboard"
            }
        );
    }

    #[test]
    fn scenario_ta_on_unrestricted_route() {
        let ta = user(Role::Ta);
        assert_eq!(evaluate(Some(&ta), &[], "/my-courses"), GuardDecision::Render);
    }
}
