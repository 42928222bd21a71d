use dioxus::prelude::*;
use server::api::list_courses;
use shared_types::{Course, CourseStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormSelect, Input, PageHeader, PageTitle, SearchBar, Skeleton,
};
use std::collections::BTreeSet;

use crate::routes::Route;

/// Case-insensitive match against a course's code, title, and instructor.
fn matches_query(course: &Course, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    course.code.to_lowercase().contains(&q)
        || course.title.to_lowercase().contains(&q)
        || course.instructor.to_lowercase().contains(&q)
}

fn status_badge(status: CourseStatus) -> (BadgeVariant, &'static str) {
    match status {
        CourseStatus::Open => (BadgeVariant::Success, "Open"),
        CourseStatus::Closed => (BadgeVariant::Secondary, "Closed"),
        CourseStatus::Archived => (BadgeVariant::Outline, "Archived"),
    }
}

/// Course catalog. The list is fetched once; search and the department
/// filter run client-side over that array.
#[component]
pub fn CourseCatalog() -> Element {
    let mut search_query = use_signal(String::new);
    let mut filter_department = use_signal(String::new);

    let mut courses_resource = use_server_future(list_courses)?;
    let result = courses_resource();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Course Catalog" }
            }

            match result {
                None => rsx! {
                    div { class: "skeleton-grid",
                        for _ in 0..4 {
                            Card {
                                CardHeader {
                                    Skeleton { style: "height: 1rem; width: 50%;" }
                                }
                                CardContent {
                                    Skeleton { style: "height: 3rem; width: 100%;" }
                                }
                            }
                        }
                    }
                },

                Some(Err(err)) => rsx! {
                    Card {
                        CardHeader {
                            CardTitle { "Error" }
                            CardDescription { "Failed to load the catalog." }
                        }
                        CardContent {
                            p { class: "courses-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { courses_resource.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(courses)) => {
                    let departments: BTreeSet<String> =
                        courses.iter().map(|c| c.department.clone()).collect();

                    let query = search_query.read().clone();
                    let department = filter_department.read().clone();
                    let filtered: Vec<Course> = courses
                        .iter()
                        .filter(|c| matches_query(c, &query))
                        .filter(|c| department.is_empty() || c.department == department)
                        .cloned()
                        .collect();
                    let has_filters = !query.is_empty() || !department.is_empty();

                    rsx! {
                        SearchBar {
                            Input {
                                value: search_query.read().clone(),
                                placeholder: "Search by code, title, or instructor...",
                                on_input: move |evt: FormEvent| {
                                    search_query.set(evt.value().to_string());
                                },
                            }
                            FormSelect {
                                value: "{filter_department}",
                                onchange: move |evt: Event<FormData>| {
                                    filter_department.set(evt.value().to_string());
                                },
                                option { value: "", "All Departments" }
                                for dept in departments.iter() {
                                    option { value: "{dept}", "{dept}" }
                                }
                            }
                            if has_filters {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| {
                                        search_query.set(String::new());
                                        filter_department.set(String::new());
                                    },
                                    "Clear Filters"
                                }
                            }
                        }

                        if filtered.is_empty() {
                            Card {
                                CardContent {
                                    p { class: "empty-text", "No courses match your filters." }
                                }
                            }
                        }

                        div { class: "catalog-grid",
                            for course in filtered {
                                CatalogCard { course }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// A single course entry in the catalog grid.
#[component]
fn CatalogCard(course: Course) -> Element {
    let (variant, label) = status_badge(course.status);

    rsx! {
        Card {
            CardHeader {
                div { class: "catalog-card-top",
                    CardTitle { "{course.code}" }
                    Badge { variant: variant, "{label}" }
                }
                CardDescription { "{course.title}" }
            }
            CardContent {
                div { class: "catalog-card-meta",
                    span { "{course.department}" }
                    span { "{course.instructor}" }
                    span { "{course.credits} credits" }
                    span { "{course.enrolled} / {course.capacity} enrolled" }
                }
                Link { to: Route::CourseDetail { id: course.id },
                    Button { variant: ButtonVariant::Outline, "View Course" }
                }
            }
        }
    }
}
