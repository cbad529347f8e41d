//! Span-to-markup rendering.

use crate::scanner::{Scanner, Span, push_image};
use crate::tag::Tag;

/// Bullet emitted for unordered list items.
const BULLET: &str = "• ";

/// List context for the next `<li>`.
///
/// Only the most recent list-start tag matters: closing a list does not
/// restore an outer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    /// No list seen yet. Items render as bullets.
    None,
    Unordered,
    /// Inside `<ol>`, holding the number of the next item.
    Ordered { next: usize },
}

impl ListState {
    fn push_item(&mut self, out: &mut String) {
        match self {
            Self::None | Self::Unordered => out.push_str(BULLET),
            Self::Ordered { next } => {
                out.push_str(&next.to_string());
                out.push_str(". ");
                *next += 1;
            }
        }
    }
}

/// Convert a report/comment HTML fragment into lightweight markup.
///
/// Never fails: anything outside the supported vocabulary is copied through.
/// HTML entities are decoded after conversion, across the whole output.
/// Only well-formed references are decoded: `&amp` without the semicolon and
/// the NUL reference `&#0;` stay as written.
///
/// # Examples
///
/// ```
/// use ycs_markup::render;
///
/// assert_eq!(render("<b>bold</b> &amp; <i>italic</i>"), "**bold** & *italic*");
/// assert_eq!(render("<ol><li>one</li><li>two</li></ol>"), "1. one2. two");
/// ```
pub fn render(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut list = ListState::None;

    for span in Scanner::new(html) {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Image { src } => push_image(&mut out, src),
            Span::Link { href, label } => {
                out.push('[');
                out.push_str(&label);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            Span::Open(tag) => match tag {
                Tag::OrderedList => list = ListState::Ordered { next: 1 },
                Tag::UnorderedList => list = ListState::Unordered,
                Tag::ListItem => list.push_item(&mut out),
                Tag::LineBreak => out.push('\n'),
                _ => out.push_str(tag.marker().unwrap_or_default()),
            },
            Span::Close(tag) => out.push_str(tag.marker().unwrap_or_default()),
        }
    }

    html_escape::decode_html_entities(&out).into_owned()
}
