use dioxus::prelude::*;
use server::api::get_dashboard_stats;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, ContentSide, Separator, Skeleton, Tooltip, TooltipContent, TooltipTrigger,
};

use crate::routes::Route;

/// Number of skeleton placeholders shown while data is loading.
const SKELETON_COUNT: usize = 4;

/// Admin dashboard displaying aggregate stats and recent accounts.
#[component]
pub fn AdminDashboard() -> Element {
    let mut stats_resource = use_server_future(get_dashboard_stats)?;
    let stats_result = stats_resource();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Campus Overview" }

            match stats_result {
                None => rsx! { LoadingSkeletons {} },

                Some(Err(err)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Error" }
                            CardDescription { "Failed to load dashboard data." }
                        }
                        CardContent {
                            p { class: "dashboard-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { stats_resource.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(stats)) => rsx! {
                    div { class: "stats-grid",
                        StatCard {
                            title: "Total Users",
                            value: "{stats.total_users}",
                            tooltip_text: "All provisioned accounts, any role.",
                        }
                        StatCard {
                            title: "Courses",
                            value: "{stats.total_courses}",
                            tooltip_text: "Catalog entries across all departments.",
                        }
                        StatCard {
                            title: "Open Courses",
                            value: "{stats.open_courses}",
                            tooltip_text: "Courses currently accepting enrollments.",
                        }
                        StatCard {
                            title: "Active Enrollments",
                            value: "{stats.active_enrollments}",
                            tooltip_text: "Enrollments that have not been dropped.",
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Recent Accounts" }
                            CardDescription { "Newest provisioned users." }
                        }
                        CardContent {
                            for (idx, user) in stats.recent_users.iter().enumerate() {
                                if idx > 0 {
                                    Separator {}
                                }
                                div { class: "user-row",
                                    span { class: "user-row-name", "{user.display_name}" }
                                    span { class: "user-row-email", "{user.email}" }
                                    div { class: "user-row-spacer" }
                                    Badge {
                                        variant: match Role::from_str_or_default(&user.role) {
                                            Role::Admin => BadgeVariant::Destructive,
                                            Role::Ta => BadgeVariant::Primary,
                                            _ => BadgeVariant::Secondary,
                                        },
                                        "{user.role}"
                                    }
                                }
                            }
                            if stats.recent_users.is_empty() {
                                p { class: "empty-text", "No accounts yet." }
                            }
                        }
                    }

                    div { class: "admin-actions",
                        Link { to: Route::AdminUsers {},
                            Button { variant: ButtonVariant::Primary, "Manage Users" }
                        }
                        Link { to: Route::CourseCatalog {},
                            Button { variant: ButtonVariant::Secondary, "View Catalog" }
                        }
                    }
                },
            }
        }
    }
}

/// Grid of skeleton placeholders shown during initial data load.
#[component]
fn LoadingSkeletons() -> Element {
    rsx! {
        div { class: "skeleton-grid",
            for _ in 0..SKELETON_COUNT {
                Card {
                    CardHeader {
                        Skeleton { style: "height: 1rem; width: 60%;" }
                    }
                    CardContent {
                        Skeleton { style: "height: 2rem; width: 40%;" }
                    }
                }
            }
        }
    }
}

/// A single stat card with a tooltip on an info icon.
#[component]
fn StatCard(title: String, value: String, tooltip_text: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                div { class: "stat-header-row",
                    CardTitle { "{title}" }
                    Tooltip {
                        TooltipTrigger {
                            span { class: "stat-info-icon", "?" }
                        }
                        TooltipContent { side: ContentSide::Top, "{tooltip_text}" }
                    }
                }
            }
            CardContent {
                span { class: "stat-value", "{value}" }
            }
        }
    }
}
