use dioxus::prelude::*;
use server::api::{enroll, get_course};
use shared_types::AppError;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageTitle, Separator, Skeleton, ToastOptions,
};

use crate::routes::Route;

/// Course detail page with the enroll action.
///
/// Enrollment failures (full course, duplicate enrollment) surface as an
/// inline message, never as a raw error.
#[component]
pub fn CourseDetail(id: i64) -> Element {
    let toast = use_toast();
    let mut enrolling = use_signal(|| false);
    let mut enroll_error = use_signal(|| Option::<String>::None);

    let mut course_resource = use_server_future(move || async move { get_course(id).await })?;
    let result = course_resource();

    let handle_enroll = move |_| {
        if enrolling() {
            return;
        }
        enrolling.set(true);
        enroll_error.set(None);
        spawn(async move {
            match enroll(id).await {
                Ok(_) => {
                    toast.success("Enrolled!".to_string(), ToastOptions::new());
                    course_resource.restart();
                }
                Err(e) => {
                    enroll_error.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            enrolling.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "container",
            match result {
                None => rsx! {
                    Card {
                        CardHeader {
                            Skeleton { style: "height: 1.5rem; width: 40%;" }
                        }
                        CardContent {
                            Skeleton { style: "height: 5rem; width: 100%;" }
                        }
                    }
                },

                Some(Err(err)) => rsx! {
                    PageHeader {
                        PageTitle { "Course" }
                    }
                    Card {
                        CardHeader {
                            CardTitle { "Not Available" }
                            CardDescription { "This course could not be loaded." }
                        }
                        CardContent {
                            p { class: "courses-error-text",
                                {AppError::friendly_message(&err.to_string())}
                            }
                            Link { to: Route::CourseCatalog {},
                                Button { variant: ButtonVariant::Secondary, "Back to Catalog" }
                            }
                        }
                    }
                },

                Some(Ok(course)) => rsx! {
                    PageHeader {
                        PageTitle { "{course.code} — {course.title}" }
                    }

                    Card {
                        CardHeader {
                            div { class: "catalog-card-top",
                                CardTitle { "{course.title}" }
                                Badge {
                                    variant: if course.has_seats() { BadgeVariant::Success } else { BadgeVariant::Secondary },
                                    if course.has_seats() { "Open" } else { "Unavailable" }
                                }
                            }
                            CardDescription { "{course.department} · {course.instructor} · {course.credits} credits" }
                        }
                        CardContent {
                            p { class: "course-description", "{course.description}" }

                            Separator {}

                            div { class: "course-detail-meta",
                                span { "Seats: {course.enrolled} / {course.capacity}" }
                            }

                            if let Some(err) = enroll_error() {
                                div { class: "courses-error-text", "{err}" }
                            }

                            div { class: "course-detail-actions",
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: enrolling() || !course.has_seats(),
                                    onclick: handle_enroll,
                                    if enrolling() { "Enrolling..." } else { "Enroll" }
                                }
                                Link { to: Route::CourseCatalog {},
                                    Button { variant: ButtonVariant::Ghost, "Back to Catalog" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
