//! Color tokens shared by every section of the page.
//!
//! Markup only ever references the token names (`bg-background`,
//! `text-primary-foreground`, ...). `tailwind.config.js` resolves those names
//! to `hsl(var(--token))`, and [`stylesheet`] emits the variables for both
//! palettes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToken {
    Background,
    Foreground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Border,
    Input,
    Ring,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 11] = [
        ThemeToken::Background,
        ThemeToken::Foreground,
        ThemeToken::Primary,
        ThemeToken::PrimaryForeground,
        ThemeToken::Secondary,
        ThemeToken::SecondaryForeground,
        ThemeToken::Accent,
        ThemeToken::AccentForeground,
        ThemeToken::Border,
        ThemeToken::Input,
        ThemeToken::Ring,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeToken::Background => "background",
            ThemeToken::Foreground => "foreground",
            ThemeToken::Primary => "primary",
            ThemeToken::PrimaryForeground => "primary-foreground",
            ThemeToken::Secondary => "secondary",
            ThemeToken::SecondaryForeground => "secondary-foreground",
            ThemeToken::Accent => "accent",
            ThemeToken::AccentForeground => "accent-foreground",
            ThemeToken::Border => "border",
            ThemeToken::Input => "input",
            ThemeToken::Ring => "ring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }

    pub fn css_var(self) -> String {
        format!("--{}", self.name())
    }
}

/// Literal HSL channel values (`H S% L%`) for each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub secondary: &'static str,
    pub secondary_foreground: &'static str,
    pub accent: &'static str,
    pub accent_foreground: &'static str,
    pub border: &'static str,
    pub input: &'static str,
    pub ring: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "0 0% 100%",
    foreground: "222.2 84% 4.9%",
    primary: "221.2 83.2% 53.3%",
    primary_foreground: "210 40% 98%",
    secondary: "210 40% 96.1%",
    secondary_foreground: "222.2 47.4% 11.2%",
    accent: "38 92% 50%",
    accent_foreground: "222.2 47.4% 11.2%",
    border: "214.3 31.8% 91.4%",
    input: "214.3 31.8% 91.4%",
    ring: "221.2 83.2% 53.3%",
};

pub const DARK: Palette = Palette {
    background: "222.2 84% 4.9%",
    foreground: "210 40% 98%",
    primary: "217.2 91.2% 59.8%",
    primary_foreground: "222.2 47.4% 11.2%",
    secondary: "217.2 32.6% 17.5%",
    secondary_foreground: "210 40% 98%",
    accent: "38 92% 50%",
    accent_foreground: "222.2 47.4% 11.2%",
    border: "217.2 32.6% 17.5%",
    input: "217.2 32.6% 17.5%",
    ring: "224.3 76.3% 48%",
};

impl Palette {
    pub fn value(&self, token: ThemeToken) -> &'static str {
        match token {
            ThemeToken::Background => self.background,
            ThemeToken::Foreground => self.foreground,
            ThemeToken::Primary => self.primary,
            ThemeToken::PrimaryForeground => self.primary_foreground,
            ThemeToken::Secondary => self.secondary,
            ThemeToken::SecondaryForeground => self.secondary_foreground,
            ThemeToken::Accent => self.accent,
            ThemeToken::AccentForeground => self.accent_foreground,
            ThemeToken::Border => self.border,
            ThemeToken::Input => self.input,
            ThemeToken::Ring => self.ring,
        }
    }

    fn declarations(&self) -> String {
        ThemeToken::ALL
            .iter()
            .map(|token| format!("  {}: {};\n", token.css_var(), self.value(*token)))
            .collect()
    }
}

pub const DARK_CLASS: &str = "dark";

/// CSS custom properties for both palettes: light on `:root`, dark on `.dark`.
pub fn stylesheet() -> String {
    format!(
        ":root {{\n{}}}\n.{} {{\n{}}}\n",
        LIGHT.declarations(),
        DARK_CLASS,
        DARK.declarations()
    )
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::DARK_CLASS;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    fn html_element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }

    pub fn prefers_dark() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }

    pub fn apply_html_class(is_dark: bool) {
        let html = match html_element() {
            Some(node) => node,
            None => return,
        };
        let list = html.class_list();
        if is_dark {
            let _ = list.add_1(DARK_CLASS);
        } else {
            let _ = list.remove_1(DARK_CLASS);
        }
    }

    pub fn watch_system_theme(on_change: impl Fn(bool) + 'static) {
        let media_query = match web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) {
            Some(list) => list,
            None => return,
        };
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(_)>);
        if media_query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not subscribe to color scheme changes");
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{apply_html_class, prefers_dark, watch_system_theme};

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark() -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_html_class(_is_dark: bool) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_system_theme(_on_change: impl Fn(bool) + 'static) {}
