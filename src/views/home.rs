use dioxus::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Fast to start",
        body: "Clone, run and start shaping your prototype in minutes.",
    },
    Feature {
        icon: "🌊",
        title: "Ocean Professional",
        body: "A calm blue and amber palette with light and dark modes.",
    },
    Feature {
        icon: "💬",
        title: "Chat ready",
        body: "A chat page with typing feedback, ready to wire to a real bot later.",
    },
];

#[component]
pub fn HomeView(on_get_started: EventHandler<()>) -> Element {
    rsx! {
        section { class: "page home-page",
            div { class: "hero",
                div { class: "hero-fade" }
                div { class: "hero-content",
                    h1 { class: "hero-title", "Build Faster with Proto Bot" }
                    p { class: "hero-tagline",
                        "A lightweight starter featuring an Ocean Professional theme, ready for rapid prototyping."
                    }
                    div { class: "hero-actions",
                        a {
                            class: "btn btn-primary",
                            href: "#get-started",
                            onclick: move |ev| {
                                ev.prevent_default();
                                on_get_started.call(());
                            },
                            "Get Started"
                        }
                        a { class: "btn btn-secondary", href: "#learn-more", "Learn More" }
                    }
                }
            }
            div { id: "features", class: "feature-grid",
                for feature in FEATURES.iter() {
                    div { key: "{feature.title}", class: "feature-card",
                        div { class: "feature-icon", "{feature.icon}" }
                        h3 { class: "feature-title", "{feature.title}" }
                        p { class: "text-muted", "{feature.body}" }
                    }
                }
            }
            div { id: "about", class: "home-section",
                h2 { class: "section-title", "About" }
                p { class: "text-muted",
                    "Proto Bot answers on the device itself. Nothing you type leaves this window."
                }
            }
            div { id: "contact", class: "home-section",
                h2 { class: "section-title", "Contact" }
                p { class: "text-muted", "Questions or ideas? Open an issue on the project tracker." }
            }
        }
    }
}
