use crate::{
    components::cards::FeatureCard,
    pages::home::content::{FEATURES, SERVICES_ANCHOR},
};
use leptos::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=SERVICES_ANCHOR class="bg-background text-foreground">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center">"What we offer"</h2>
                <div class="mt-10 grid grid-cols-1 gap-6 md:grid-cols-3">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! { <FeatureCard title=feature.title description=feature.description /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
