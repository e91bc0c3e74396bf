use leptos::*;
use leptos_meta::{provide_meta_context, Html, Meta, Title};
use leptos_router::*;

use crate::{
    components::theme::ThemeProvider,
    config,
    pages::{home::HomePage, home::repository::ContactRepository, not_found::NotFoundPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/*any"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ContactRepository::default());
    let site_name = config::site_config().site_name;

    view! {
        <Html lang="en" />
        <Title text=site_name.clone() />
        <Meta name="description" content=format!("{} - build something people love", site_name) />
        <ThemeProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
