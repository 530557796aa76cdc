use crate::shared::code_highlight::highlight_or_plain;
use leptos::prelude::*;

/// Editable code surface with live syntax highlighting
///
/// A transparent textarea sits on top of a highlighted `<pre>` with identical
/// font metrics, so the caret and selection come from the textarea while the
/// colours come from the `<pre>` underneath.
#[component]
pub fn CodeEditor(
    /// Current code (reactive)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the full text on every edit
    on_input: Callback<String>,
    /// Grammar token, e.g. "js" or "rust"
    #[prop(into)]
    language: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let highlighted = move || value.with(|code| overlay_html(code, &language));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("code-editor {}", additional_class())>
            <div class="code-editor__surface">
                <pre class="code-editor__highlight" aria-hidden="true" inner_html=highlighted></pre>
                <textarea
                    class="code-editor__input"
                    spellcheck="false"
                    autocapitalize="off"
                    autocomplete="off"
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}

/// Highlighted HTML sized to match the textarea content.
///
/// A `<pre>` collapses a trailing newline, the textarea does not, so one
/// space is appended to keep the last empty line.
fn overlay_html(code: &str, language: &str) -> String {
    let mut html = highlight_or_plain(code, language);
    if code.is_empty() || code.ends_with('\n') {
        html.push(' ');
    }
    html
}
