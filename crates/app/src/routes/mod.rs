pub mod admin_dashboard;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod login;
pub mod my_courses;
pub mod not_found;
pub mod student_dashboard;
pub mod ta_dashboard;
pub mod users;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdGraduationCap, LdLayoutDashboard, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarRail, SidebarSeparator, SidebarTrigger, Switch, SwitchThumb,
};

use crate::auth::{use_auth, use_display_name, use_user_role};
use crate::chat::ChatWidget;
use crate::guard::{self, AdminGuard, StudentGuard, TaGuard};
use crate::nav::links_for;
use crate::session::use_session;

use admin_dashboard::AdminDashboard;
use course_detail::CourseDetail;
use courses::CourseCatalog;
use dashboard::Dashboard;
use login::Login;
use my_courses::MyCourses;
use not_found::NotFound;
use student_dashboard::StudentDashboard;
use ta_dashboard::TaDashboard;
use users::AdminUsers;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/courses")]
    CourseCatalog {},
    #[route("/courses/:id")]
    CourseDetail { id: i64 },
    #[route("/my-courses")]
    MyCourses {},
    #[nest("/student")]
    #[layout(StudentGuard)]
    #[route("/dashboard")]
    StudentDashboard {},
    #[end_layout]
    #[end_nest]
    #[nest("/ta")]
    #[layout(TaGuard)]
    #[route("/dashboard")]
    TaDashboard {},
    #[end_layout]
    #[end_nest]
    #[nest("/admin")]
    #[layout(AdminGuard)]
    #[route("/dashboard")]
    AdminDashboard {},
    #[route("/users")]
    AdminUsers {},
    #[end_layout]
    #[end_nest]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML. During
/// hydration the embedded data is available immediately. The
/// `SuspenseBoundary` in `App` catches the suspension and shows a spinner.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let mut session = use_session();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !session.is_authenticated() {
                session.set_user(&user);
                auth.set_user(user);
            }
            guard::apply(guard::evaluate(
                session.current_user().as_ref(),
                &[],
                &route.to_string(),
            ))
        }
        Some(Ok(None)) | Some(Err(_)) => {
            session.clear();
            auth.clear_auth();
            guard::apply(guard::evaluate(None, &[], &route.to_string()))
        }
        None => {
            rsx! {
                div { class: "guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Landing redirect for "/": forwards to the role's dashboard.
#[component]
fn Home() -> Element {
    let role = use_user_role();
    navigator().replace(NavigationTarget::<Route>::External(
        role.landing_path().to_string(),
    ));

    rsx! {
        div { class: "guard-loading",
            p { "Redirecting..." }
        }
    }
}

/// Icon for a sidebar link, keyed by its label.
fn nav_icon(label: &str) -> Element {
    match label {
        "Dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "Course Catalog" => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
        "My Courses" => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 } },
        "Users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        _ => rsx! {},
    }
}

/// Main app layout with sidebar navigation and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let mut session = use_session();
    let role = use_user_role();
    let display_name = use_display_name();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        family: Signal::new("campus".to_string()),
        is_dark: Signal::new(false),
    });

    let page_title = match &route {
        Route::Home {} | Route::Dashboard {} => "Dashboard",
        Route::StudentDashboard {} => "Student Dashboard",
        Route::TaDashboard {} => "TA Dashboard",
        Route::AdminDashboard {} => "Admin Dashboard",
        Route::CourseCatalog {} | Route::CourseDetail { .. } => "Courses",
        Route::MyCourses {} => "My Courses",
        Route::AdminUsers {} => "Users",
        Route::Login { .. } => "Sign In",
        _ => "",
    };

    let links = links_for(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "StudyHub" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Navigate" }
                        SidebarGroupContent {
                            SidebarMenu {
                                for link in links {
                                    SidebarMenuItem {
                                        Link { to: link.route.clone(),
                                            SidebarMenuButton { active: route == link.route,
                                                {nav_icon(link.label)}
                                                "{link.label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Role" }
                        Badge {
                            variant: match role {
                                shared_types::Role::Admin => BadgeVariant::Destructive,
                                shared_types::Role::Ta => BadgeVariant::Primary,
                                _ => BadgeVariant::Secondary,
                            },
                            "{role.display_name()}"
                        }
                    }
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark Mode" }
                        Switch {
                            checked: (theme_state.is_dark)(),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }

                SidebarRail {}
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    AvatarFallback {
                                        {display_name.read().split_whitespace().filter_map(|w| w.chars().next()).take(2).collect::<String>().to_uppercase()}
                                    }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "name".to_string(),
                                    index: 0usize,
                                    span { class: "dropdown-display-name", "{display_name}" }
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        spawn(async move {
                                            let _ = server::api::logout().await;
                                        });
                                        session.clear();
                                        auth.clear_auth();
                                        navigator().push(Route::Login { redirect: None });
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }

                ChatWidget {}
            }
        }
    }
}
