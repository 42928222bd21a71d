use dioxus::prelude::*;
use server::api::list_users;
use shared_types::Role;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, PageHeader, PageTitle, SearchBar, Separator, Skeleton,
};

/// Admin user management list.
#[component]
pub fn AdminUsers() -> Element {
    let mut search_query = use_signal(String::new);

    let mut users_resource = use_server_future(list_users)?;
    let result = users_resource();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./courses.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Users" }
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
                            CardDescription { "Failed to load users." }
                        }
                        CardContent {
                            p { class: "courses-error-text", "{err}" }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: move |_| { users_resource.restart(); },
                                "Retry"
                            }
                        }
                    }
                },

                Some(Ok(users)) => {
                    let query = search_query.read().to_lowercase();
                    let filtered: Vec<_> = users
                        .iter()
                        .filter(|u| {
                            query.is_empty()
                                || u.display_name.to_lowercase().contains(&query)
                                || u.email.to_lowercase().contains(&query)
                        })
                        .cloned()
                        .collect();

                    rsx! {
                        SearchBar {
                            Input {
                                value: search_query.read().clone(),
                                placeholder: "Search by name or email...",
                                on_input: move |evt: FormEvent| {
                                    search_query.set(evt.value().to_string());
                                },
                            }
                        }

                        Card {
                            CardContent {
                                if filtered.is_empty() {
                                    p { class: "empty-text", "No users match your search." }
                                }
                                for (idx, user) in filtered.iter().enumerate() {
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
                            }
                        }
                    }
                },
            }
        }
    }
}
