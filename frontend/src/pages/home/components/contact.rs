use crate::{
    components::{
        common::{Button, ButtonVariant},
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::home::{
        content::CONTACT_ANCHOR,
        view_model::{use_contact_view_model, ContactFormState},
    },
};
use leptos::{ev::SubmitEvent, Callback, *};

const FIELD_CLASSES: &str = "block w-full rounded-md border border-input bg-background px-3 py-2 text-sm text-foreground placeholder:text-foreground/50 focus:outline-none focus:ring-2 focus:ring-ring";
const LABEL_CLASSES: &str = "block text-sm font-medium text-foreground";

#[component]
pub fn ContactForm(
    form: ContactFormState,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] success: Signal<Option<String>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let name = form.name;
    let email = form.email;
    let message = form.message;

    view! {
        <form class="space-y-4" novalidate=true on:submit=move |ev| on_submit.call(ev)>
            <div>
                <label for="contact-name" class=LABEL_CLASSES>"Name"</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    class=FIELD_CLASSES
                    placeholder="Your name"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-email" class=LABEL_CLASSES>"Email"</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    class=FIELD_CLASSES
                    placeholder="you@example.com"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="contact-message" class=LABEL_CLASSES>"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    class=FIELD_CLASSES
                    placeholder="How can we help?"
                    prop:value=message
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </div>

            {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
            {move || success.get().map(|msg| view! { <SuccessMessage message=msg /> })}

            <Button variant=ButtonVariant::Primary class="w-full" attr:type="submit">
                "Send Message"
            </Button>
        </form>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let vm = use_contact_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = vm.submit() {
            log::debug!("contact submission rejected: {}", err);
        }
    });

    view! {
        <section id=CONTACT_ANCHOR class="bg-background text-foreground">
            <div class="max-w-xl mx-auto py-16 px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl font-bold text-center">"Contact Us"</h2>
                <p class="mt-2 mb-8 text-center text-foreground/70">
                    "Have a question? Send us a message and we will get back to you."
                </p>
                <div class="rounded-lg border border-border bg-background p-6 shadow-sm">
                    <ContactForm
                        form=vm.form
                        error=vm.error
                        success=vm.success
                        on_submit=handle_submit
                    />
                </div>
            </div>
        </section>
    }
}
