//! Inline Markdown tokenizer.
//!
//! Every stage takes a sequence of spans and returns a new one. Only plain
//! spans are re-examined; spans that already carry a style pass through
//! unchanged and keep their position.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::options::InlineOptions;
use crate::span::{TextSpan, TextStyle};
use crate::{MarkdownError, Result};

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid image pattern"));

// No look-behind in `regex`: match the optional `!` and drop those matches
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!?\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid link pattern"));

/// A link or image occurrence and its byte range in the searched text
struct Markup {
    range: Range<usize>,
    text: String,
    url: String,
}

impl Markup {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            range: caps.get(0)?.range(),
            text: caps.get(1)?.as_str().to_string(),
            url: caps.get(2)?.as_str().to_string(),
        })
    }
}

/// Split plain spans on `delimiter`, re-tagging every odd segment as `style`.
///
/// An absent sequence (`None`) yields an empty result. Empty segments are
/// dropped, so `"**bold**"` produces a single bold span.
///
/// # Errors
///
/// Returns [`MarkdownError::UnclosedDelimiter`] when a plain span contains an
/// odd number of delimiters, and [`MarkdownError::EmptyDelimiter`] when
/// `delimiter` is empty.
pub fn split_by_delimiter(
    spans: impl Into<Option<Vec<TextSpan>>>,
    delimiter: &str,
    style: TextStyle,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Err(MarkdownError::EmptyDelimiter);
    }

    let mut result = Vec::new();

    for span in spans.into().unwrap_or_default() {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text().split(delimiter).collect();
        if segments.len() % 2 == 0 {
            tracing::debug!(delimiter, text = span.text(), "unclosed inline delimiter");
            return Err(MarkdownError::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (index, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_style = if index % 2 == 0 { span.style() } else { style };
            result.push(TextSpan::new(segment, segment_style));
        }
    }

    tracing::trace!(delimiter, %style, spans = result.len(), "split by delimiter");
    Ok(result)
}

fn find_images(text: &str) -> Vec<Markup> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| Markup::from_captures(&caps))
        .collect()
}

fn find_links(text: &str) -> Vec<Markup> {
    LINK_RE
        .captures_iter(text)
        .filter(|caps| !caps[0].starts_with('!'))
        .filter_map(|caps| Markup::from_captures(&caps))
        .collect()
}

/// Find every `![alt](url)` in document order
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|markup| (markup.text, markup.url))
        .collect()
}

/// Find every `[text](url)` not preceded by `!`, in document order
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|markup| (markup.text, markup.url))
        .collect()
}

/// Replace `![alt](url)` markup in plain spans with image spans
pub fn split_images(spans: impl Into<Option<Vec<TextSpan>>>) -> Vec<TextSpan> {
    let result = split_markup(spans.into().unwrap_or_default(), find_images, TextSpan::image);
    tracing::trace!(spans = result.len(), "split images");
    result
}

/// Replace `[text](url)` markup in plain spans with link spans
pub fn split_links(spans: impl Into<Option<Vec<TextSpan>>>) -> Vec<TextSpan> {
    let result = split_markup(spans.into().unwrap_or_default(), find_links, TextSpan::link);
    tracing::trace!(spans = result.len(), "split links");
    result
}

/// Cut every match out of each plain span in one left-to-right pass, keeping
/// the text between matches as plain spans.
fn split_markup<F, S>(spans: Vec<TextSpan>, find: F, make_span: S) -> Vec<TextSpan>
where
    F: Fn(&str) -> Vec<Markup>,
    S: Fn(&str, &str) -> TextSpan,
{
    let mut result = Vec::new();

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let matches = find(span.text());
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let text = span.text();
        let mut cursor = 0;
        for markup in &matches {
            let before = &text[cursor..markup.range.start];
            if !before.is_empty() {
                result.push(TextSpan::new(before, span.style()));
            }
            result.push(make_span(markup.text.as_str(), markup.url.as_str()));
            cursor = markup.range.end;
        }

        let rest = &text[cursor..];
        if !rest.is_empty() {
            result.push(TextSpan::new(rest, span.style()));
        }
    }

    result
}

/// Tokenize raw inline Markdown into typed spans.
///
/// Stages run in a fixed order: bold, italic and code delimiters, then images,
/// then links.
pub fn text_to_spans(text: &str, options: &InlineOptions) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_by_delimiter(spans, &options.bold_delimiter, TextStyle::Bold)?;
    let spans = split_by_delimiter(spans, &options.italic_delimiter, TextStyle::Italic)?;
    let mut spans = split_by_delimiter(spans, &options.code_delimiter, TextStyle::Code)?;

    if options.images {
        spans = split_images(spans);
    }
    if options.links {
        spans = split_links(spans);
    }

    tracing::debug!(input_len = text.len(), spans = spans.len(), "tokenized inline text");
    Ok(spans)
}

/// [`text_to_spans`] with default options
pub fn text_to_spans_default(text: &str) -> Result<Vec<TextSpan>> {
    text_to_spans(text, &InlineOptions::default())
}
