//! Syntax highlighting to HTML using syntect.
//!
//! Produces inline-styled `<span>` runs without a surrounding `<pre>`, so the
//! caller controls layout. Falls back to escaped plain text when the language
//! is unknown or highlighting fails.

use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use thiserror::Error;

/// Dark theme matching the editor and code block backgrounds
pub const THEME_NAME: &str = "base16-ocean.dark";

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Errors that can occur during syntax highlighting.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// No syntax definition matches the language token.
    #[error("no syntax found for language: {language}")]
    NoSyntaxFound { language: String },
    /// The configured theme is missing from the theme set.
    #[error("theme not available: {0}")]
    NoTheme(&'static str),
    /// Syntect internal error during highlighting.
    #[error("highlighting failed: {0}")]
    HighlightFailed(#[from] syntect::Error),
}

fn theme() -> Result<&'static Theme, HighlightError> {
    THEME_SET
        .themes
        .get(THEME_NAME)
        .ok_or(HighlightError::NoTheme(THEME_NAME))
}

/// Highlights `code` with the grammar named by `language`.
///
/// `language` is a fence token or file extension such as `rust`, `rs`,
/// `js` or `python`.
///
/// # Errors
///
/// Returns [`HighlightError::NoSyntaxFound`] for an unknown language and
/// [`HighlightError::HighlightFailed`] if syntect fails on a line.
pub fn highlight_to_html(code: &str, language: &str) -> Result<String, HighlightError> {
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .ok_or_else(|| HighlightError::NoSyntaxFound {
            language: language.to_owned(),
        })?;

    let mut highlighter = HighlightLines::new(syntax, theme()?);
    let mut output = String::with_capacity(code.len() * 4);

    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, &SYNTAX_SET)?;
        output.push_str(&styled_line_to_highlighted_html(
            &regions,
            IncludeBackground::No,
        )?);
    }

    Ok(output)
}

/// Highlights `code`, or returns it HTML-escaped if highlighting is unavailable.
pub fn highlight_or_plain(code: &str, language: &str) -> String {
    highlight_to_html(code, language).unwrap_or_else(|err| {
        log::debug!("Falling back to plain code block: {}", err);
        escape_html(code)
    })
}

/// Escapes the characters that are significant in HTML text and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
