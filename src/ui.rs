use crate::config::AppConfig;
use crate::theme::{theme_definition, toggle_aria_label};
use crate::types::ThemeMode;
use crate::views::shared::current_year;
use crate::views::{ChatView, HomeView};
use dioxus::prelude::*;

const PROTOBOT_CSS: Asset = asset!("/assets/protobot.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Home,
    Chat,
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let active_page = use_signal(|| Page::Home);
    let initial_theme = config.theme;
    let theme = use_signal(move || initial_theme);

    rsx! {
        ThemeStyles { theme: theme() }
        div { class: "app-shell",
            NavBar { active_page, theme }
            main { class: "app-main",
                PageContent { active_page, config }
            }
            Footer {}
        }
    }
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: PROTOBOT_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn PageContent(active_page: Signal<Page>, config: AppConfig) -> Element {
    let mut active_page = active_page;
    // Leaving the chat page unmounts ChatView, which tears down its session.
    match active_page() {
        Page::Home => rsx! {
            HomeView { on_get_started: move |_| active_page.set(Page::Chat) }
        },
        Page::Chat => rsx! {
            ChatView { config: config.chat.clone() }
        },
    }
}

#[component]
fn NavBar(active_page: Signal<Page>, theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let mode = theme();
    let definition = theme_definition(mode);
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-content",
                div { class: "brand",
                    div { class: "brand-mark", "P" }
                    span { class: "brand-name", "Proto Bot" }
                }
                div { class: "nav-links",
                    a { class: "nav-link", href: "#features", "Features" }
                    a { class: "nav-link", href: "#about", "About" }
                    a { class: "nav-link", href: "#contact", "Contact" }
                }
                div { class: "nav-actions",
                    div { class: "tabs",
                        PageTab { active_page, page: Page::Home, label: "Home" }
                        PageTab { active_page, page: Page::Chat, label: "Chat" }
                    }
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        aria_label: toggle_aria_label(mode),
                        onclick: move |_| theme.set(mode.toggle()),
                        "{definition.toggle_icon}"
                        span { class: "theme-toggle-label", "{definition.toggle_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PageTab(active_page: Signal<Page>, page: Page, label: &'static str) -> Element {
    let mut active_page = active_page;
    let class = if active_page() == page {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_page.set(page),
            "{label}"
        }
    }
}

#[component]
fn Footer() -> Element {
    let year = current_year();
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                p { class: "text-muted", "© {year} Proto Bot. All rights reserved." }
                div { class: "footer-links",
                    a { class: "nav-link", href: "#privacy", "Privacy" }
                    a { class: "nav-link", href: "#terms", "Terms" }
                }
            }
        }
    }
}
