use crate::chat::{ChatConfig, ChatController, TranscriptState};
use crate::types::{ChatMessage, Role};
use crate::views::shared::{avatar_label, format_message_timestamp, role_class};
use dioxus::events::Key;
use dioxus::prelude::*;

const COMPOSER_PLACEHOLDER: &str =
    "Type your message... (Enter to send, Shift+Enter for a new line)";

const SCROLL_TO_BOTTOM_JS: &str = r#"
const el = document.getElementById('chat-list');
if (el) { el.scrollTop = el.scrollHeight; }
"#;

/// Chat page. Owns one [`ChatController`] for as long as it is mounted.
#[component]
pub fn ChatView(config: ChatConfig) -> Element {
    let mut controller = use_signal(move || ChatController::new(config));
    let transcript = use_transcript(controller);

    use_drop(move || {
        if let Ok(mut chat) = controller.try_write() {
            chat.cancel_pending_reply();
        }
    });

    use_effect(move || {
        let state = transcript.read();
        let _ = (state.len(), state.is_bot_typing());
        let _ = document::eval(SCROLL_TO_BOTTOM_JS);
    });

    let mut send = move || {
        let ready = controller.read().can_send();
        if ready {
            controller.write().send_draft();
        }
    };

    let snapshot = transcript();
    let is_typing = snapshot.is_bot_typing();
    let draft = controller.read().draft().to_string();
    let send_disabled = draft.trim().is_empty() || is_typing;
    let send_class = if send_disabled {
        "btn btn-primary disabled"
    } else {
        "btn btn-primary"
    };

    rsx! {
        section { class: "page chat-page",
            div { class: "chat-card",
                div { class: "chat-header",
                    div { class: "chat-header-badge", "💬" }
                    h2 { class: "chat-title", "Chat" }
                }
                div { id: "chat-list", class: "chat-list",
                    for message in snapshot.messages().iter() {
                        MessageBubble { key: "{message.id}", message: message.clone() }
                    }
                    if is_typing {
                        TypingIndicator {}
                    }
                }
                div { class: "composer",
                    div { class: "composer-inner",
                        textarea {
                            rows: "1",
                            placeholder: COMPOSER_PLACEHOLDER,
                            value: "{draft}",
                            autofocus: true,
                            oninput: move |ev| controller.write().set_draft(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    send();
                                }
                            },
                        }
                        button {
                            class: send_class,
                            r#type: "button",
                            aria_label: "Send message",
                            disabled: send_disabled,
                            onclick: move |_| send(),
                            "Send"
                        }
                    }
                    div { class: "composer-hint", "Press Enter to send • Shift+Enter for a new line" }
                }
            }
        }
    }
}

/// Mirrors the controller's watch channel into a signal so the page
/// re-renders on every transcript change.
fn use_transcript(controller: Signal<ChatController>) -> Signal<TranscriptState> {
    let mut transcript = use_signal(|| controller.peek().snapshot());
    use_future(move || async move {
        let mut updates = controller.peek().subscribe();
        loop {
            let latest = updates.borrow_and_update().clone();
            transcript.set(latest);
            if updates.changed().await.is_err() {
                break;
            }
        }
    });
    transcript
}

#[component]
pub fn MessageBubble(message: ChatMessage, #[props(default = true)] show_avatar: bool) -> Element {
    let role = role_class(message.role);
    let (initial, title) = avatar_label(message.role);
    let is_user = matches!(message.role, Role::User);
    let timestamp = format_message_timestamp(message.created_at);

    rsx! {
        div { class: "message-row {role}",
            if !is_user && show_avatar {
                div { class: "avatar {role}", aria_hidden: "true", title: "{title}", "{initial}" }
            }
            div { class: "message-stack",
                div { class: "bubble {role}",
                    p { class: "bubble-text", "{message.text}" }
                }
                if let Some(ts) = timestamp {
                    div { class: "message-meta {role}",
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
            if is_user && show_avatar {
                div { class: "avatar {role}", aria_hidden: "true", title: "{title}", "{initial}" }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row bot typing",
            div { class: "avatar bot", aria_hidden: "true", "B" }
            div { class: "bubble bot",
                div { class: "typing-dots",
                    span { class: "sr-only", "Bot is typing" }
                    for delay in [0u32, 150, 300] {
                        span { key: "{delay}", class: "typing-dot", style: "animation-delay: {delay}ms" }
                    }
                }
            }
        }
    }
}
