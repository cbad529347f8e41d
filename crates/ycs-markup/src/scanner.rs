//! Single-pass span scanner over report HTML.
//!
//! Splits the input into literal runs and recognized markup. Everything that
//! does not match a known construct is returned as literal text, so the
//! scanner never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::tag::Tag;

/// Image tag with a leading double-quoted `src` attribute.
static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<img src="([^"]+)"[^>]*>"#).expect("invalid image regex"));

/// Opening part of an anchor with a leading double-quoted `href` attribute.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<a href="([^"]+)"[^>]*>"#).expect("invalid link regex"));

/// Opening or void tag, swallowing one trailing newline.
static OPEN_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-z]+)(?:[\s/][^>]*)?>\n?").expect("invalid opening tag regex")
});

/// Closing tag, tolerating a stray trailing slash (`</b/>`).
static CLOSE_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^</([a-z]+)/?>").expect("invalid closing tag regex"));

const LINK_END: &str = "</a>";

/// A piece of scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Span<'a> {
    /// Literal text, copied through as is.
    Text(&'a str),
    /// `<img src="...">`.
    Image { src: &'a str },
    /// `<a href="...">label</a>`, with images inside the label already rendered.
    Link { href: &'a str, label: String },
    /// Opening or void tag from the vocabulary.
    Open(Tag),
    /// Closing tag from the vocabulary.
    Close(Tag),
}

/// Iterator over the spans of an HTML fragment.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let input = self.input;
        let rest = &input[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if rest.starts_with('<') {
            if let Some((span, len)) = markup_at(rest) {
                self.pos += len;
                return Some(span);
            }
            // Unrecognized '<': keep it and the text up to the next candidate.
            let end = rest[1..].find('<').map_or(rest.len(), |i| i + 1);
            self.pos += end;
            return Some(Span::Text(&rest[..end]));
        }

        let end = rest.find('<').unwrap_or(rest.len());
        self.pos += end;
        Some(Span::Text(&rest[..end]))
    }
}

/// Try to recognize markup at the start of `rest` (which begins with `<`).
///
/// Returns the span and the number of bytes it covers.
fn markup_at(rest: &str) -> Option<(Span<'_>, usize)> {
    if rest.starts_with("<img") {
        if let Some((src, len)) = image_at(rest) {
            return Some((Span::Image { src }, len));
        }
        return None;
    }

    if rest.starts_with("<a ") {
        return link_at(rest);
    }

    if rest.starts_with("</") {
        let caps = CLOSE_TAG_PATTERN.captures(rest)?;
        let tag = Tag::from_name(caps.get(1)?.as_str()).filter(|tag| tag.closes())?;
        return Some((Span::Close(tag), caps.get(0)?.end()));
    }

    let caps = OPEN_TAG_PATTERN.captures(rest)?;
    let tag = Tag::from_name(caps.get(1)?.as_str())?;
    Some((Span::Open(tag), caps.get(0)?.end()))
}

fn image_at(rest: &str) -> Option<(&str, usize)> {
    let caps = IMAGE_PATTERN.captures(rest)?;
    Some((caps.get(1)?.as_str(), caps.get(0)?.end()))
}

/// Recognize a complete anchor.
///
/// The label is plain text up to `</a>`; the only markup allowed inside it is
/// an image, which is rendered in place. Anything else rejects the anchor.
fn link_at(rest: &str) -> Option<(Span<'_>, usize)> {
    let caps = LINK_PATTERN.captures(rest)?;
    let href = caps.get(1)?.as_str();
    let mut pos = caps.get(0)?.end();
    let mut label = String::new();

    loop {
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(LINK_END) {
            pos = rest.len() - after.len();
            break;
        }
        if tail.starts_with('<') {
            let (src, len) = image_at(tail)?;
            push_image(&mut label, src);
            pos += len;
            continue;
        }
        let end = tail.find('<')?;
        label.push_str(&tail[..end]);
        pos += end;
    }

    if label.is_empty() {
        return None;
    }
    Some((Span::Link { href, label }, pos))
}

/// Append the image markup for `src`.
pub(crate) fn push_image(out: &mut String, src: &str) {
    out.push_str("![IMG](");
    out.push_str(src);
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(input: &str) -> Vec<Span<'_>> {
        Scanner::new(input).collect()
    }

    #[test]
    fn test_plain_text_is_one_span() {
        assert_eq!(scan("no markup here"), vec![Span::Text("no markup here")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(
            scan("<b>x</b>"),
            vec![Span::Open(Tag::Bold), Span::Text("x"), Span::Close(Tag::Bold)]
        );
    }

    #[test]
    fn test_open_tag_with_attributes_and_newline() {
        assert_eq!(
            scan("<p class=\"lead\">\ntext"),
            vec![Span::Open(Tag::Paragraph), Span::Text("text")]
        );
    }

    #[test]
    fn test_only_one_newline_is_swallowed() {
        assert_eq!(
            scan("<li>\n\nx"),
            vec![Span::Open(Tag::ListItem), Span::Text("\nx")]
        );
    }

    #[test]
    fn test_self_closing_variants() {
        assert_eq!(scan("<br>"), vec![Span::Open(Tag::LineBreak)]);
        assert_eq!(scan("<br/>"), vec![Span::Open(Tag::LineBreak)]);
        assert_eq!(scan("<br />"), vec![Span::Open(Tag::LineBreak)]);
    }

    #[test]
    fn test_closing_with_stray_slash() {
        assert_eq!(scan("</i/>"), vec![Span::Close(Tag::Italic)]);
    }

    #[test]
    fn test_closing_line_break_is_text() {
        assert_eq!(scan("</br>"), vec![Span::Text("</br>")]);
    }

    #[test]
    fn test_unknown_tags_are_text() {
        assert_eq!(
            scan("<span>x</span>"),
            vec![Span::Text("<span>x"), Span::Text("</span>")]
        );
        assert_eq!(scan("<blockquote>"), vec![Span::Text("<blockquote>")]);
    }

    #[test]
    fn test_lone_angle_bracket() {
        assert_eq!(scan("a < b"), vec![Span::Text("a "), Span::Text("< b")]);
    }

    #[test]
    fn test_image() {
        assert_eq!(
            scan(r#"<img src="https://x/y.png" alt="y" />"#),
            vec![Span::Image {
                src: "https://x/y.png"
            }]
        );
        assert_eq!(
            scan(r#"<img src="a.png">"#),
            vec![Span::Image { src: "a.png" }]
        );
    }

    #[test]
    fn test_image_without_leading_src_is_text() {
        assert_eq!(
            scan(r#"<img alt="x" src="a.png">"#),
            vec![Span::Text(r#"<img alt="x" src="a.png">"#)]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            scan(r#"<a href="https://x" target="_blank">label</a>!"#),
            vec![
                Span::Link {
                    href: "https://x",
                    label: "label".to_owned()
                },
                Span::Text("!")
            ]
        );
    }

    #[test]
    fn test_link_around_image() {
        assert_eq!(
            scan(r#"<a href="u"><img src="i.png" /></a>"#),
            vec![Span::Link {
                href: "u",
                label: "![IMG](i.png)".to_owned()
            }]
        );
    }

    #[test]
    fn test_link_with_nested_tag_is_text() {
        let spans = scan(r#"<a href="u"><b>x</b></a>"#);
        assert_eq!(spans[0], Span::Text(r#"<a href="u">"#));
        assert_eq!(spans[1], Span::Open(Tag::Bold));
    }

    #[test]
    fn test_unterminated_or_empty_link_is_text() {
        assert_eq!(
            scan(r#"<a href="u">dangling"#),
            vec![Span::Text(r#"<a href="u">dangling"#)]
        );
        assert_eq!(
            scan(r#"<a href="u"></a>"#),
            vec![Span::Text(r#"<a href="u">"#), Span::Text("</a>")]
        );
    }

    #[test]
    fn test_single_quoted_attributes_are_text() {
        assert_eq!(
            scan("<a href='u'>x</a>"),
            vec![Span::Text("<a href='u'>x"), Span::Text("</a>")]
        );
    }
}
