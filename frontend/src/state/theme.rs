use crate::theme;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_system() -> Self {
        if theme::prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => theme::DARK_CLASS,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: create_rw_signal(initial),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme set to {:?}", theme);
        self.theme.set(theme);
        self.apply_to_dom();
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    fn apply_to_dom(&self) {
        theme::apply_html_class(self.theme.get_untracked() == Theme::Dark);
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn use_theme() -> ThemeState {
    match use_context::<ThemeState>() {
        Some(state) => state,
        None => provide_theme(),
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new(Theme::from_system());
    provide_context(state);
    state.apply_to_dom();

    theme::watch_system_theme(move |is_dark| {
        state.set_theme(if is_dark { Theme::Dark } else { Theme::Light });
    });

    state
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn host_defaults_to_light() {
        with_runtime(|| {
            let state = provide_theme();
            assert_eq!(state.current().get(), Theme::Light);
            assert_eq!(state.current().get().as_class(), "");
        });
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        with_runtime(|| {
            let state = use_theme();
            state.toggle();
            assert_eq!(state.current().get(), Theme::Dark);
            assert_eq!(state.current().get().as_class(), "dark");
            state.toggle();
            assert_eq!(state.current().get(), Theme::Light);
        });
    }

    #[test]
    fn use_theme_returns_provided_state() {
        with_runtime(|| {
            let provided = provide_theme();
            provided.set_theme(Theme::Dark);
            assert_eq!(use_theme().current().get(), Theme::Dark);
        });
    }
}
