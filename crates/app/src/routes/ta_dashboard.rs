use dioxus::prelude::*;
use server::api::teaching_assignments;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Progress,
    ProgressIndicator, Skeleton,
};

use crate::routes::Route;

/// TA dashboard: assigned courses with live enrollment counts.
#[component]
pub fn TaDashboard() -> Element {
    let mut assignments = use_server_future(teaching_assignments)?;
    let result = assignments();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Teaching Assignments" }

            match result {
                None => rsx! {
                    div { class: "skeleton-grid",
                        for _ in 0..2 {
                            Card {
                                CardHeader {
                                    Skeleton { style: "height: 1rem; width: 60%;" }
                                }
                                CardContent {
                                    Skeleton { style: "height: 2rem; width: 80%;" }
                                }
                            }
                        }
                    }
                },

                Some(Err(err)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Error" }
                            CardDescription { "Failed to load teaching assignments." }
                        }
                        CardContent {
                            p { class: "dashboard-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { assignments.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        Card {
                            CardContent {
                                p { class: "empty-text", "No courses assigned this semester." }
                            }
                        }
                    }
                    div { class: "assignment-grid",
                        for item in items.iter() {
                            Card {
                                CardHeader {
                                    CardTitle { "{item.course.code} — {item.course.title}" }
                                    CardDescription { "Taught by {item.course.instructor}" }
                                }
                                CardContent {
                                    div { class: "assignment-count-row",
                                        span { class: "assignment-count-label", "Enrollment" }
                                        span { class: "assignment-count",
                                            "{item.active_enrollments} / {item.course.capacity}"
                                        }
                                    }
                                    Progress {
                                        value: Some(
                                            if item.course.capacity == 0 {
                                                0.0
                                            } else {
                                                (item.active_enrollments as f64
                                                    / item.course.capacity as f64) * 100.0
                                            }
                                        ),
                                        ProgressIndicator {}
                                    }
                                    div { class: "assignment-actions",
                                        Link { to: Route::CourseDetail { id: item.course.id },
                                            Button { variant: ButtonVariant::Outline, "View Course" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
