use dioxus::prelude::*;
use server::api::{drop_course, my_enrollments};
use shared_types::AppError;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageTitle, Separator, Skeleton, ToastOptions,
};

use crate::routes::Route;

/// The signed-in user's enrollments, with the drop action.
#[component]
pub fn MyCourses() -> Element {
    let toast = use_toast();
    let mut dropping = use_signal(|| Option::<i64>::None);

    let mut enrollments = use_server_future(my_enrollments)?;
    let result = enrollments();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "My Courses" }
            }

            match result {
                None => rsx! {
                    Card {
                        CardContent {
                            Skeleton { style: "height: 4rem; width: 100%;" }
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
                            p { class: "courses-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { enrollments.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(enrolled)) => rsx! {
                    if enrolled.is_empty() {
                        Card {
                            CardContent {
                                p { class: "empty-text", "You are not enrolled in any courses." }
                                Link { to: Route::CourseCatalog {},
                                    Button { variant: ButtonVariant::Primary, "Browse the catalog" }
                                }
                            }
                        }
                    } else {
                        Card {
                            CardContent {
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
                                        Button {
                                            variant: ButtonVariant::Destructive,
                                            disabled: dropping() == Some(item.course.id),
                                            onclick: {
                                                let course_id = item.course.id;
                                                move |_| {
                                                    if dropping().is_some() {
                                                        return;
                                                    }
                                                    dropping.set(Some(course_id));
                                                    spawn(async move {
                                                        match drop_course(course_id).await {
                                                            Ok(_) => {
                                                                toast.success("Course dropped.".to_string(), ToastOptions::new());
                                                                enrollments.restart();
                                                            }
                                                            Err(e) => {
                                                                toast.error(
                                                                    AppError::friendly_message(&e.to_string()),
                                                                    ToastOptions::new(),
                                                                );
                                                            }
                                                        }
                                                        dropping.set(None);
                                                    });
                                                }
                                            },
                                            if dropping() == Some(item.course.id) { "Dropping..." } else { "Drop" }
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
