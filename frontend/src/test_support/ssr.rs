use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Every whitespace-separated class from every `class="..."` attribute.
pub fn class_names(html: &str) -> Vec<String> {
    let mut classes = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find("class=\"") {
        rest = &rest[start + "class=\"".len()..];
        let end = match rest.find('"') {
            Some(end) => end,
            None => break,
        };
        classes.extend(rest[..end].split_whitespace().map(str::to_string));
        rest = &rest[end..];
    }
    classes
}
