//! Inline tokenizer - splits one line of text into styled spans.
//!
//! Markers are tried in a fixed priority order at every position, so a
//! two-character bold marker always wins over the one-character italic
//! marker starting at the same place. Anything that does not close is
//! emitted literally as plain text.

use crate::core::ast::Span;

/// Inline marker kinds, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// `**bold**`
    StrongStar,
    /// `__bold__`
    StrongUnderscore,
    /// `` `code` ``
    Code,
    /// `[label](url)`
    Link,
    /// `_italic_`
    EmphasisUnderscore,
    /// `*italic*`
    EmphasisStar,
}

const PRIORITY: [Marker; 6] = [
    Marker::StrongStar,
    Marker::StrongUnderscore,
    Marker::Code,
    Marker::Link,
    Marker::EmphasisUnderscore,
    Marker::EmphasisStar,
];

/// A successful marker match at the current position.
#[derive(Debug)]
struct MarkerMatch {
    /// `None` when the delimiters enclose nothing.
    span: Option<Span>,
    /// Bytes consumed, delimiters included.
    len: usize,
}

impl Marker {
    fn try_match(self, rest: &str) -> Option<MarkerMatch> {
        match self {
            Marker::StrongStar => styled(rest, "**", Span::Bold),
            Marker::StrongUnderscore => styled(rest, "__", Span::Bold),
            Marker::Code => styled(rest, "`", Span::Code),
            Marker::Link => link(rest),
            Marker::EmphasisUnderscore => {
                styled(rest, "_", Span::Italic).filter(|m| m.span.is_some())
            }
            Marker::EmphasisStar => {
                if rest.starts_with("**") {
                    return None;
                }
                styled(rest, "*", Span::Italic).filter(|m| m.span.is_some())
            }
        }
    }
}

/// Tokenizes one unit of text (paragraph, heading, list item or table cell).
///
/// Never fails: malformed or unterminated markup degrades to plain text.
/// Consecutive plain characters are coalesced into a single span.
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        if let Some(found) = match_at(rest) {
            if let Some(span) = found.span {
                flush_plain(&mut plain, &mut spans);
                spans.push(span);
            }
            pos += found.len;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        plain.push(ch);
        pos += ch.len_utf8();
    }

    flush_plain(&mut plain, &mut spans);
    spans
}

fn match_at(rest: &str) -> Option<MarkerMatch> {
    if !rest.starts_with(['*', '_', '`', '[']) {
        return None;
    }
    PRIORITY.iter().find_map(|marker| marker.try_match(rest))
}

fn flush_plain(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}

/// Matches `delim inner delim` with the shortest possible `inner`.
fn styled(rest: &str, delim: &str, make: fn(String) -> Span) -> Option<MarkerMatch> {
    let body = rest.strip_prefix(delim)?;
    let end = body.find(delim)?;
    let inner = &body[..end];
    Some(MarkerMatch {
        span: (!inner.is_empty()).then(|| make(inner.to_string())),
        len: delim.len() * 2 + end,
    })
}

/// Matches `[label](url)`. The label ends at the first `]`, which must be
/// followed directly by `(`; the url ends at the first `)`.
fn link(rest: &str) -> Option<MarkerMatch> {
    let body = rest.strip_prefix('[')?;
    let label_end = body.find(']')?;
    let target = body[label_end + 1..].strip_prefix('(')?;
    let url_end = target.find(')')?;

    Some(MarkerMatch {
        span: Some(Span::Link {
            label: body[..label_end].to_string(),
            url: target[..url_end].to_string(),
        }),
        len: label_end + url_end + 4,
    })
}
