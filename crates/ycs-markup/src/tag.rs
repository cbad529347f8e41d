//! Tag vocabulary understood by the converter.

/// Formatting tag from the fixed vocabulary.
///
/// Anchors and images are not listed here: they carry an attribute value and
/// are recognized as whole spans by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Italic,
    Bold,
    Strong,
    Pre,
    Code,
    OrderedList,
    UnorderedList,
    ListItem,
    LineBreak,
    Paragraph,
}

impl Tag {
    /// Look up a tag by its exact (lowercase) name.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "i" => Self::Italic,
            "b" => Self::Bold,
            "strong" => Self::Strong,
            "pre" => Self::Pre,
            "code" => Self::Code,
            "ol" => Self::OrderedList,
            "ul" => Self::UnorderedList,
            "li" => Self::ListItem,
            "br" => Self::LineBreak,
            "p" => Self::Paragraph,
            _ => return None,
        })
    }

    /// Symmetric inline marker, if the tag has one.
    pub(crate) fn marker(self) -> Option<&'static str> {
        match self {
            Self::Italic => Some("*"),
            Self::Bold | Self::Strong => Some("**"),
            Self::Pre => Some("`"),
            Self::Code => Some("```"),
            _ => None,
        }
    }

    /// Whether a closing form of this tag is recognized.
    ///
    /// `</br>` has no meaning and stays in the output verbatim.
    pub(crate) fn closes(self) -> bool {
        self != Self::LineBreak
    }
}
