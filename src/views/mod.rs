pub mod shared;

#[cfg(feature = "dioxus")]
pub mod chat;
#[cfg(feature = "dioxus")]
pub mod home;

#[cfg(feature = "dioxus")]
pub use chat::{ChatView, MessageBubble};
#[cfg(feature = "dioxus")]
pub use home::HomeView;
