use crate::{
    components::common::{button_classes, ButtonVariant},
    pages::home::content::{CONTACT_ANCHOR, HERO_SUBTITLE, HERO_TITLE, HOME_ANCHOR, SERVICES_ANCHOR},
};
use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=HOME_ANCHOR class="bg-secondary text-secondary-foreground">
            <div class="max-w-7xl mx-auto py-20 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold tracking-tight sm:text-5xl lg:text-6xl">
                    {HERO_TITLE}
                </h1>
                <p class="mt-4 max-w-2xl mx-auto text-lg text-secondary-foreground/80">
                    {HERO_SUBTITLE}
                </p>
                <div class="mt-8 flex flex-col sm:flex-row justify-center gap-4">
                    <a href=format!("#{}", CONTACT_ANCHOR) class=button_classes(ButtonVariant::Primary)>
                        "Get in touch"
                    </a>
                    <a href=format!("#{}", SERVICES_ANCHOR) class=button_classes(ButtonVariant::Outline)>
                        "Learn more"
                    </a>
                </div>
            </div>
        </section>
    }
}
