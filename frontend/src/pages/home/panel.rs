use crate::{
    components::layout::Layout,
    pages::home::components::{
        contact::ContactSection, features::Features, footer::Footer, hero::Hero,
        navigation::Navigation, testimonials::Testimonials,
    },
};
use leptos::*;

#[component]
pub fn HomePanel() -> impl IntoView {
    view! {
        <Layout>
            <Navigation />
            <main class="flex-1">
                <Hero />
                <Features />
                <Testimonials />
                <ContactSection />
            </main>
            <Footer />
        </Layout>
    }
}
