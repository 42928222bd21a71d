use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::auth::use_display_name;
use crate::routes::Route;

/// Generic landing page.
///
/// This is the fallback landing target for sessions whose role has no
/// specific dashboard, and a plain starting point for everyone else.
#[component]
pub fn Dashboard() -> Element {
    let display_name = use_display_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            h2 { class: "dashboard-title", "Welcome, {display_name}" }

            Card {
                CardHeader {
                    CardTitle { "Get Started" }
                    CardDescription { "Browse the catalog and manage your enrollments." }
                }
                CardContent {
                    div { class: "dashboard-quick-links",
                        Link { to: Route::CourseCatalog {},
                            Button { variant: ButtonVariant::Primary, "Browse Courses" }
                        }
                        Link { to: Route::MyCourses {},
                            Button { variant: ButtonVariant::Secondary, "My Courses" }
                        }
                    }
                }
            }
        }
    }
}
