use dioxus::prelude::*;
use shared_types::{AppError, ChatMessage, ChatSender};

/// Floating support chat widget.
///
/// The reply side is a placeholder: every message gets a canned response
/// from the server after a short delay. The in-flight request is scoped to
/// this component, so navigating away cancels it instead of appending to an
/// unmounted panel.
#[component]
pub fn ChatWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut draft = use_signal(String::new);
    let mut waiting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_send = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft().trim().to_string();
        if body.is_empty() || waiting() {
            return;
        }
        draft.set(String::new());
        error_msg.set(None);
        messages
            .write()
            .push(ChatMessage::user(body.clone(), chrono::Utc::now().to_rfc3339()));
        waiting.set(true);

        spawn(async move {
            match server::api::send_chat_message(body).await {
                Ok(reply) => messages.write().push(reply),
                Err(e) => {
                    error_msg.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
            waiting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./chat.css") }

        div { class: "chat-widget",
            if open() {
                div { class: "chat-panel",
                    div { class: "chat-panel-header",
                        span { class: "chat-panel-title", "StudyHub Support" }
                        button {
                            class: "chat-panel-close",
                            "aria-label": "Close chat",
                            onclick: move |_| open.set(false),
                            "\u{2715}"
                        }
                    }

                    div { class: "chat-messages",
                        if messages.read().is_empty() {
                            p { class: "chat-empty", "Ask us anything about courses or enrollment." }
                        }
                        for message in messages.read().iter() {
                            div {
                                class: match message.sender {
                                    ChatSender::User => "chat-bubble chat-bubble-user",
                                    ChatSender::Assistant => "chat-bubble chat-bubble-assistant",
                                },
                                "{message.body}"
                            }
                        }
                        if waiting() {
                            div { class: "chat-bubble chat-bubble-assistant chat-typing", "..." }
                        }
                        if let Some(err) = error_msg() {
                            div { class: "chat-error", "{err}" }
                        }
                    }

                    form {
                        class: "chat-compose",
                        onsubmit: handle_send,
                        input {
                            class: "chat-input",
                            placeholder: "Type a message...",
                            value: draft(),
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "chat-send",
                            disabled: waiting(),
                            "Send"
                        }
                    }
                }
            }

            button {
                class: "chat-toggle",
                "aria-label": "Toggle support chat",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                if open() { "\u{2715}" } else { "\u{1F4AC}" }
            }
        }
    }
}
