use crate::components::{
    common::{button_classes, ButtonVariant},
    layout::Layout,
};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="flex-1 flex flex-col items-center justify-center py-24 px-4 text-center">
                <p class="text-sm font-semibold text-primary">"404"</p>
                <h1 class="mt-2 text-3xl font-bold text-foreground">"Page not found"</h1>
                <a href="/" class=format!("mt-6 {}", button_classes(ButtonVariant::Secondary))>
                    "Back to home"
                </a>
            </div>
        </Layout>
    }
}
