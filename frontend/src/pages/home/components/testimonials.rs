use crate::{
    components::cards::TestimonialCard,
    pages::home::content::{ABOUT_ANCHOR, TESTIMONIALS},
};
use leptos::*;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id=ABOUT_ANCHOR class="bg-secondary text-secondary-foreground">
            <div class="max-w-5xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center">"What our clients say"</h2>
                <div class="mt-10 grid grid-cols-1 gap-6 md:grid-cols-2">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! { <TestimonialCard name=t.name feedback=t.feedback /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
