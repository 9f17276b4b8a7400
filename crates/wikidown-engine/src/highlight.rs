//! Syntax highlighting for fenced code blocks.
//!
//! The renderer only sees the [`Highlighter`] trait. With the `highlight`
//! feature (on by default) [`SyntectHighlighter`] is the default; without it
//! [`PlainHighlighter`] leaves every block to the plain fallback.

/// Result of asking a highlighter about one code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlighted {
    Html(String),
    Unrecognized,
}

pub trait Highlighter: Send + Sync {
    fn highlight(&self, code: &str, language: &str) -> Highlighted;
}

/// Recognizes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, _code: &str, _language: &str) -> Highlighted {
        Highlighted::Unrecognized
    }
}

/// The highlighter a fresh `RendererBuilder` starts with.
#[must_use]
pub fn default_highlighter() -> Box<dyn Highlighter> {
    #[cfg(feature = "highlight")]
    {
        Box::new(SyntectHighlighter::new())
    }
    #[cfg(not(feature = "highlight"))]
    {
        Box::new(PlainHighlighter)
    }
}

#[cfg(feature = "highlight")]
pub use syntect_impl::{HighlightError, SyntectHighlighter};

#[cfg(feature = "highlight")]
mod syntect_impl {
    use syntect::html::{ClassStyle, ClassedHTMLGenerator};
    use syntect::parsing::{SyntaxReference, SyntaxSet};
    use syntect::util::LinesWithEndings;
    use thiserror::Error;

    use super::{Highlighted, Highlighter};

    #[derive(Debug, Error)]
    pub enum HighlightError {
        #[error("failed to highlight {language} block: {source}")]
        Syntect {
            language: String,
            #[source]
            source: syntect::Error,
        },
    }

    /// Class-based highlighting; token classes are prefixed with `hl-`.
    pub struct SyntectHighlighter {
        syntaxes: SyntaxSet,
    }

    impl SyntectHighlighter {
        pub const CLASS_PREFIX: &'static str = "hl-";

        #[must_use]
        pub fn new() -> Self {
            Self {
                syntaxes: SyntaxSet::load_defaults_newlines(),
            }
        }

        pub fn try_highlight(&self, code: &str, language: &str) -> Result<Option<String>, HighlightError> {
            let Some(syntax) = self.syntaxes.find_syntax_by_token(language) else {
                return Ok(None);
            };
            let body = self.classed(code, syntax).map_err(|source| HighlightError::Syntect {
                language: language.to_string(),
                source,
            })?;
            Ok(Some(format!("<div class=\"highlight\"><pre>{body}</pre></div>")))
        }

        fn classed(&self, code: &str, syntax: &SyntaxReference) -> Result<String, syntect::Error> {
            let mut generator = ClassedHTMLGenerator::new_with_class_style(
                syntax,
                &self.syntaxes,
                ClassStyle::SpacedPrefixed {
                    prefix: Self::CLASS_PREFIX,
                },
            );
            for line in LinesWithEndings::from(code) {
                generator.parse_html_for_line_which_includes_newline(line)?;
            }
            Ok(generator.finalize())
        }
    }

    impl Default for SyntectHighlighter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Highlighter for SyntectHighlighter {
        fn highlight(&self, code: &str, language: &str) -> Highlighted {
            match self.try_highlight(code, language) {
                Ok(Some(html)) => Highlighted::Html(html),
                Ok(None) => Highlighted::Unrecognized,
                Err(e) => {
                    log::warn!("{e}");
                    Highlighted::Unrecognized
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn known_language_is_classed() {
            let hl = SyntectHighlighter::new();
            let Highlighted::Html(html) = hl.highlight("fn main() {}\n", "rust") else {
                panic!("rust should be recognized");
            };
            assert!(html.starts_with("<div class=\"highlight\"><pre>"));
            assert!(html.contains("class=\"hl-"));
            assert!(html.contains("main"));
        }

        #[test]
        fn unknown_language_is_unrecognized() {
            let hl = SyntectHighlighter::new();
            assert_eq!(hl.highlight("x", "no-such-language"), Highlighted::Unrecognized);
        }

        #[test]
        fn code_is_escaped() {
            let hl = SyntectHighlighter::new();
            let Highlighted::Html(html) = hl.highlight("a < b\n", "python") else {
                panic!("python should be recognized");
            };
            assert!(html.contains("&lt;"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_recognizes_nothing() {
        assert_eq!(PlainHighlighter.highlight("x = 1", "python"), Highlighted::Unrecognized);
    }
}
