use crate::{config, pages::home::content::NAV_LINKS};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let cfg = config::site_config();
    let copyright = format!("© {} {}. All rights reserved.", cfg.copyright_year, cfg.site_name);

    view! {
        <footer class="mt-auto bg-primary text-primary-foreground">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm">{copyright}</p>
                <ul class="flex gap-4 text-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.target class="hover:underline text-primary-foreground/90">
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_shows_copyright_from_config() {
        let cfg = config::site_config();
        let html = render_to_string(move || view! { <Footer /> });
        assert!(html.contains(&cfg.copyright_year.to_string()));
        assert!(html.contains(&cfg.site_name));
        assert!(html.contains("All rights reserved."));
    }
}
