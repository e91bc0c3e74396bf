use crate::{components::theme::ThemeToggle, config, pages::home::content::NAV_LINKS};
use leptos::*;

const LINK_CLASSES: &str =
    "text-foreground/80 hover:text-primary px-3 py-2 rounded-md text-sm font-medium hover:bg-secondary";

#[component]
pub fn Navigation() -> impl IntoView {
    let site_name = config::site_config().site_name;
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="sticky top-0 z-10 bg-background/95 border-b border-border backdrop-blur">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <span class="text-xl font-bold text-primary">{site_name}</span>
                    <div class="flex items-center gap-2">
                        <nav class="hidden md:flex space-x-2" aria-label="Main">
                            {NAV_LINKS
                                .iter()
                                .map(|link| view! { <a href=link.target class=LINK_CLASSES>{link.label}</a> })
                                .collect_view()}
                        </nav>
                        <ThemeToggle />
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-foreground hover:bg-secondary"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <Show
                                    when=move || menu_open.get()
                                    fallback=move || {
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        }
                                    }
                                >
                                    <path
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                        stroke-width="2"
                                        d="M6 18L18 6M6 6l12 12"
                                    />
                                </Show>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-border">
                        <nav class="px-2 py-3 space-y-1" aria-label="Mobile">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.target
                                            class=format!("block {}", LINK_CLASSES)
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}
