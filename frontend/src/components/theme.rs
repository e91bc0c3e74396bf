use crate::state::theme::{provide_theme, use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="inline-flex h-9 w-9 items-center justify-center rounded-md border border-input text-foreground hover:bg-secondary focus:outline-none focus:ring-2 focus:ring-ring"
            on:click=on_click
            aria-label="Toggle color theme"
        >
            <span class="sr-only">
                {move || if current_theme.get() == Theme::Dark { "Switch to light theme" } else { "Switch to dark theme" }}
            </span>
            <svg
                class="h-5 w-5"
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                aria-hidden="true"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d="M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z"
                />
            </svg>
        </button>
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme_state = provide_theme();

    view! {
        <div class=move || theme_state.current().get().as_class()>
            {children()}
        </div>
    }
}
