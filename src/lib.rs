//! Proto Bot: a landing page plus a chat widget whose bot replies are
//! simulated on the device.
pub mod chat;
pub mod config;
pub mod logging;
pub mod theme;
pub mod types;
#[cfg(feature = "dioxus")]
pub mod ui;
pub mod views;
