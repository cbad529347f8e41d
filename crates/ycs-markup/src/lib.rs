//! Converter from status report HTML to lightweight markup.
//!
//! Incident reports and comments published by the status API are written in a
//! small, fixed subset of HTML. [`render`] turns such a fragment into
//! Markdown-like text:
//!
//! | HTML                          | Output            |
//! |-------------------------------|-------------------|
//! | `<i>x</i>`                    | `*x*`             |
//! | `<b>x</b>`, `<strong>x</strong>` | `**x**`        |
//! | `<pre>x</pre>`                | `` `x` ``         |
//! | `<code>x</code>`              | ` ```x``` `       |
//! | `<ul><li>x</li></ul>`         | `• x`             |
//! | `<ol><li>x</li></ol>`         | `1. x`            |
//! | `<br>`                        | newline           |
//! | `<a href="u">x</a>`           | `[x](u)`          |
//! | `<img src="u">`               | `![IMG](u)`       |
//!
//! `<p>` and the closing forms of `ol`, `ul`, `li` and `p` produce nothing.
//! Tags outside this vocabulary are kept as literal text, and HTML entities
//! are decoded in the final output.
//!
//! The input is scanned once, left to right. List numbering state lives on
//! the stack of each call, so [`render`] can be used from any number of
//! threads at once.
//!
//! # Example
//!
//! ```
//! let markup = ycs_markup::render(r#"<p>See <a href="https://example.com">the log</a></p>"#);
//! assert_eq!(markup, "See [the log](https://example.com)");
//! ```

mod render;
mod scanner;
mod tag;

pub use render::render;
