use dioxus::prelude::*;

/// Theme families available in the application.
///
/// Each family provides a dark variant, a light variant, or both.
/// Families with only one mode resolve to that mode regardless of `is_dark`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    #[default]
    Campus,
    Slate,
    /// Light-only high-contrast reading theme.
    Paper,
    /// Dark-only low-glare evening theme.
    Midnight,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[
    ThemeFamily::Campus,
    ThemeFamily::Slate,
    ThemeFamily::Paper,
    ThemeFamily::Midnight,
];

impl ThemeFamily {
    /// Internal key used for storage and Select values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Campus => "campus",
            ThemeFamily::Slate => "slate",
            ThemeFamily::Paper => "paper",
            ThemeFamily::Midnight => "midnight",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Campus => "Campus",
            ThemeFamily::Slate => "Slate",
            ThemeFamily::Paper => "Paper",
            ThemeFamily::Midnight => "Midnight",
        }
    }

    /// Parse a family key string, falling back to Campus.
    pub fn from_key(s: &str) -> Self {
        match s {
            "slate" => ThemeFamily::Slate,
            "paper" => ThemeFamily::Paper,
            "midnight" => ThemeFamily::Midnight,
            _ => ThemeFamily::Campus,
        }
    }

    /// Whether this family supports dark mode.
    pub fn has_dark(&self) -> bool {
        !matches!(self, ThemeFamily::Paper)
    }

    /// Whether this family supports light mode.
    pub fn has_light(&self) -> bool {
        !matches!(self, ThemeFamily::Midnight)
    }

    /// Resolve to the CSS `data-theme` attribute value.
    ///
    /// Single-mode families ignore `is_dark` and always return their mode.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Campus, true) => "campus-dark",
            (ThemeFamily::Campus, false) => "campus",
            (ThemeFamily::Slate, true) => "slate-dark",
            (ThemeFamily::Slate, false) => "slate",
            // Paper is light-only
            (ThemeFamily::Paper, _) => "paper",
            // Midnight is dark-only
            (ThemeFamily::Midnight, _) => "midnight",
        }
    }
}

/// Shared theme state provided as context.
///
/// The sidebar (dark/light toggle) reads and writes these signals; changes
/// call [`set_theme`] to apply.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<String>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    /// Apply the current family + mode to the document.
    pub fn apply(&self) {
        let family = ThemeFamily::from_key(&self.family.read());
        let theme = family.resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted theme from a cookie and applies it to the document root.
/// Call this once in your top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1] : 'campus';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Set the active theme, persisting to a cookie and updating the document.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_family_default_is_campus() {
        assert_eq!(ThemeFamily::default(), ThemeFamily::Campus);
    }

    #[test]
    fn theme_family_as_str_roundtrip() {
        for family in ALL_FAMILIES {
            assert_eq!(ThemeFamily::from_key(family.as_str()), *family);
        }
    }

    #[test]
    fn theme_family_from_key_unknown_falls_back() {
        assert_eq!(ThemeFamily::from_key("unknown"), ThemeFamily::Campus);
        assert_eq!(ThemeFamily::from_key(""), ThemeFamily::Campus);
    }

    #[test]
    fn theme_family_resolve_dual_mode() {
        assert_eq!(ThemeFamily::Campus.resolve(true), "campus-dark");
        assert_eq!(ThemeFamily::Campus.resolve(false), "campus");
        assert_eq!(ThemeFamily::Slate.resolve(true), "slate-dark");
        assert_eq!(ThemeFamily::Slate.resolve(false), "slate");
    }

    #[test]
    fn theme_family_resolve_single_mode() {
        assert_eq!(ThemeFamily::Paper.resolve(true), "paper");
        assert_eq!(ThemeFamily::Paper.resolve(false), "paper");
        assert_eq!(ThemeFamily::Midnight.resolve(true), "midnight");
        assert_eq!(ThemeFamily::Midnight.resolve(false), "midnight");
    }

    #[test]
    fn theme_family_mode_support() {
        assert!(ThemeFamily::Campus.has_dark());
        assert!(ThemeFamily::Campus.has_light());
        assert!(!ThemeFamily::Paper.has_dark());
        assert!(ThemeFamily::Paper.has_light());
        assert!(ThemeFamily::Midnight.has_dark());
        assert!(!ThemeFamily::Midnight.has_light());
    }
}
