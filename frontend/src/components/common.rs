use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90 shadow-sm",
            ButtonVariant::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            ButtonVariant::Outline => "border border-input bg-background text-foreground hover:bg-accent hover:text-accent-foreground",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-md px-6 py-3 text-sm font-semibold transition-colors duration-200 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 focus-visible:ring-offset-background disabled:opacity-50 disabled:cursor-not-allowed";

/// Button styling for anchors that should look like buttons.
pub fn button_classes(variant: ButtonVariant) -> String {
    format!("{} {}", BASE_CLASSES, variant.classes())
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!("{} {}", button_classes(variant), class)
            disabled=move || disabled.get()
            {..attributes}
        >
            {children()}
        </button>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn button_forwards_attributes() {
        let html = render_to_string(move || {
            view! { <Button variant=ButtonVariant::Secondary attr:type="submit">"Send"</Button> }
        });
        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("bg-secondary"));
        assert!(html.contains("Send"));
    }
}
