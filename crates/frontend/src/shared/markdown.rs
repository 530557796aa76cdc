//! Markdown to HTML for the review pane
//!
//! Fenced code blocks are highlighted with [`crate::shared::code_highlight`].
//! Raw HTML inside the markdown is rendered as visible text, never injected,
//! and link or image URLs with a scheme other than http, https or mailto are
//! emptied.

use crate::shared::code_highlight::{escape_html, highlight_or_plain};
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Renders `markdown` to an HTML fragment suitable for `inner_html`.
pub fn render_markdown(markdown: &str) -> String {
    let mut events: Vec<Event> = Vec::new();
    // (language, collected code) while inside a code block
    let mut code_block: Option<(String, String)> = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info).to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                code_block = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, code)) = code_block.take() {
                    events.push(Event::Html(CowStr::from(render_code_block(
                        &language, &code,
                    ))));
                }
            }
            Event::Text(text) => match code_block.as_mut() {
                Some((_, code)) => code.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Link {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Image {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })),
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    output
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        log::debug!("Dropping link with unsafe scheme: {}", &*url);
        CowStr::Borrowed("")
    }
}

/// True for relative URLs and for http, https and mailto.
///
/// A colon only starts a scheme if no `/`, `?` or `#` comes before it.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    if url[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = url[..colon].to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str())
}

/// First word of a fence info string: "rust,ignore" and "rust title" both give "rust"
fn fence_language(info: &str) -> &str {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or("")
}

fn render_code_block(language: &str, code: &str) -> String {
    if language.is_empty() {
        return format!("<pre class=\"code-block\"><code>{}</code></pre>\n", escape_html(code));
    }
    format!(
        "<pre class=\"code-block\"><code class=\"language-{}\">{}</code></pre>\n",
        escape_html(language),
        highlight_or_plain(code, language)
    )
}
