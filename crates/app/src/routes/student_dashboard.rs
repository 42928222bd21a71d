use dioxus::prelude::*;
use server::api::my_enrollments;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Separator, Skeleton,
};

use crate::routes::Route;

/// Number of skeleton placeholders shown while data is loading.
const SKELETON_COUNT: usize = 3;

/// Student dashboard: enrollment summary and the current course list.
#[component]
pub fn StudentDashboard() -> Element {
    let mut enrollments = use_server_future(my_enrollments)?;
    let result = enrollments();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Student Dashboard" }

            match result {
                None => rsx! {
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
                },

                Some(Err(err)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Error" }
                            CardDescription { "Failed to load your enrollments." }
                        }
                        CardContent {
                            p { class: "dashboard-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { enrollments.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(enrolled)) => {
                    let total_credits: u32 = enrolled.iter().map(|e| e.course.credits as u32).sum();
                    rsx! {
                        div { class: "stats-grid",
                            Card {
                                CardHeader { CardTitle { "Enrolled Courses" } }
                                CardContent {
                                    span { class: "stat-value", "{enrolled.len()}" }
                                }
                            }
                            Card {
                                CardHeader { CardTitle { "Credit Hours" } }
                                CardContent {
                                    span { class: "stat-value", "{total_credits}" }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "This Semester" }
                                CardDescription { "Courses you are currently enrolled in." }
                            }
                            CardContent {
                                if enrolled.is_empty() {
                                    p { class: "empty-text",
                                        "No enrollments yet. "
                                    }
                                    Link { to: Route::CourseCatalog {},
                                        Button { variant: ButtonVariant::Primary, "Browse the catalog" }
                                    }
                                }
                                for (idx, item) in enrolled.iter().enumerate() {
                                    if idx > 0 {
                                        Separator {}
                                    }
                                    div { class: "course-row",
                                        Link {
                                            to: Route::CourseDetail { id: item.course.id },
                                            class: "course-row-link",
                                            span { class: "course-row-code", "{item.course.code}" }
                                            span { class: "course-row-title", "{item.course.title}" }
                                        }
                                        div { class: "course-row-spacer" }
                                        Badge { variant: BadgeVariant::Secondary, "{item.course.credits} cr" }
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
