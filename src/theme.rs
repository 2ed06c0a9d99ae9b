use crate::types::ThemeMode;

/// Ocean Professional palette for one mode.
pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: "🌙",
            toggle_label: "Dark",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: "☀️",
            toggle_label: "Light",
        },
    }
}

/// Accessible label for the toggle button, naming the mode it switches to.
pub fn toggle_aria_label(mode: ThemeMode) -> String {
    let target = match mode.toggle() {
        ThemeMode::Light => "light",
        ThemeMode::Dark => "dark",
    };
    format!("Switch to {target} mode")
}

const LIGHT_THEME: &str = r#"
:root {
    --color-primary: #2563eb;
    --color-primary-hover: #1d4ed8;
    --color-secondary: #f59e0b;
    --color-error: #ef4444;
    --color-bg-primary: #f9fafb;
    --color-surface: #ffffff;
    --color-surface-blur: rgba(255, 255, 255, 0.8);
    --color-text-primary: #111827;
    --color-text-muted: #525252;
    --color-border: #e5e5e5;
    --color-input-border: #d4d4d4;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #ffffff;
    --color-chat-bot-text: #111827;
    --color-timestamp: #737373;
    --color-typing-dot: #a3a3a3;
    --color-hero-fade: rgba(59, 130, 246, 0.1);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-primary: #2563eb;
    --color-primary-hover: #3b82f6;
    --color-secondary: #f59e0b;
    --color-error: #ef4444;
    --color-bg-primary: #0a0a0a;
    --color-surface: #171717;
    --color-surface-blur: rgba(23, 23, 23, 0.8);
    --color-text-primary: #ffffff;
    --color-text-muted: #a3a3a3;
    --color-border: #262626;
    --color-input-border: #404040;
    --color-input-bg: #262626;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #262626;
    --color-chat-bot-text: #f5f5f5;
    --color-timestamp: #a3a3a3;
    --color-typing-dot: #d4d4d4;
    --color-hero-fade: rgba(30, 58, 138, 0.1);
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_button_names_other_mode() {
        let light = theme_definition(ThemeMode::Light);
        assert_eq!(light.toggle_label, "Dark");
        assert_eq!(toggle_aria_label(ThemeMode::Light), "Switch to dark mode");
        assert_eq!(toggle_aria_label(ThemeMode::Dark), "Switch to light mode");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            theme_definition(ThemeMode::Light).css,
            theme_definition(ThemeMode::Dark).css
        );
    }
}
