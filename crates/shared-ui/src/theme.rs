use dioxus::prelude::*;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Theme preference provided as context.
///
/// Independent of the session: signing in or out never touches it. The
/// document follows the preference through [`ThemeSeed`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            is_dark: Signal::new(initial.is_dark()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.is_dark.set(mode.is_dark());
    }

    pub fn toggle(&mut self) {
        let next = self.mode().toggled();
        self.set_mode(next);
    }
}

/// Keeps the document's `data-theme` in step with the [`ThemeState`] context.
/// Render once, below the provider, in the top-level App.
#[component]
pub fn ThemeSeed() -> Element {
    let theme = use_context::<ThemeState>();
    use_effect(move || set_theme(theme.mode()));

    rsx! {}
}

/// Set the `data-theme` attribute on the document root.
pub fn set_theme(mode: ThemeMode) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        mode.as_str()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn attribute_values() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggled_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn from_dark_matches_is_dark() {
        assert!(ThemeMode::from_dark(true).is_dark());
        assert!(!ThemeMode::from_dark(false).is_dark());
    }

    #[test]
    fn set_mode_and_toggle_update_the_preference() {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();

        dom.in_scope(ScopeId::ROOT, || {
            let mut theme = ThemeState::new(ThemeMode::Light);

            theme.set_mode(ThemeMode::Dark);
            assert_eq!(theme.mode(), ThemeMode::Dark);

            theme.set_mode(ThemeMode::Dark);
            assert_eq!(theme.mode(), ThemeMode::Dark);

            theme.toggle();
            assert_eq!(theme.mode(), ThemeMode::Light);
        });
    }
}
