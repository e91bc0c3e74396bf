use leptos::*;

pub mod components;
pub mod content;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HomePanel /> }
}
