use leptos::*;

#[component]
pub fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card rounded-lg border border-border bg-background p-6 shadow-sm transition-shadow hover:shadow-md">
            <div class="mb-4 h-10 w-10 rounded-md bg-accent text-accent-foreground flex items-center justify-center font-bold" aria-hidden="true">
                {title.chars().next().unwrap_or('*').to_string()}
            </div>
            <h3 class="text-lg font-semibold text-foreground">{title}</h3>
            <p class="mt-2 text-sm text-foreground/70">{description}</p>
        </article>
    }
}

#[component]
pub fn TestimonialCard(name: &'static str, feedback: &'static str) -> impl IntoView {
    view! {
        <figure class="testimonial-card rounded-lg border border-border bg-background p-6 shadow-sm">
            <blockquote class="text-base italic text-foreground">{feedback}</blockquote>
            <figcaption class="mt-4 text-sm font-semibold text-primary">{name}</figcaption>
        </figure>
    }
}
