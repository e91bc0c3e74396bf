use crate::theme;
use leptos::*;

/// Page wrapper: emits the theme variables and paints the page background.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let tokens = theme::stylesheet();
    view! {
        <div class="min-h-screen flex flex-col bg-background text-foreground antialiased">
            <style id="theme-tokens" inner_html=tokens></style>
            {children()}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="bg-secondary border border-ring text-secondary-foreground px-4 py-3 rounded-md"
        >
            <div class="flex items-center gap-3">
                <span class="font-bold text-primary" aria-hidden="true">"!"</span>
                <p class="text-sm">{message}</p>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            role="status"
            class="bg-accent border border-accent text-accent-foreground px-4 py-3 rounded-md"
        >
            <div class="flex items-center gap-3">
                <span class="font-bold" aria-hidden="true">"✓"</span>
                <p class="text-sm">{message}</p>
            </div>
        </div>
    }
}
