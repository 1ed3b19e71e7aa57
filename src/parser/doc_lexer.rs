//! Logos-based lexer for free-form alternatives text
//!
//! Splits documentation into `{@link ...}` tags, `{@code ...}` tags and
//! everything else. Tag bodies run to the first `}`. A tag that is never
//! closed is plain text.

use logos::Logos;
use text_size::TextSize;

/// Kind of a documentation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocTokenKind {
    Link,
    Code,
    Text,
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocToken<'a> {
    pub kind: DocTokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl<'a> DocToken<'a> {
    /// Tag body without the `{@link ` / `{@code ` prefix and closing `}`.
    pub fn body(&self) -> Option<&'a str> {
        let prefix = match self.kind {
            DocTokenKind::Link => LINK_PREFIX,
            DocTokenKind::Code => CODE_PREFIX,
            DocTokenKind::Text => return None,
        };
        self.text
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix('}'))
    }
}

const LINK_PREFIX: &str = "{@link ";
const CODE_PREFIX: &str = "{@code ";

/// Lexer wrapping the logos-generated tokenizer
pub struct DocLexer<'a> {
    inner: logos::Lexer<'a, LogosDocToken>,
    offset: u32,
}

impl<'a> DocLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosDocToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for DocLexer<'a> {
    type Item = DocToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        // logos gives up on an unterminated tag instead of backing off to `Brace`
        let kind = logos_token.map_or(DocTokenKind::Text, DocTokenKind::from);

        Some(DocToken { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<DocToken<'_>> {
    DocLexer::new(input).collect()
}

/// Logos token enum - maps to DocTokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosDocToken {
    #[regex(r"\{@link [^}]+\}")]
    Link,

    #[regex(r"\{@code [^}]+\}")]
    Code,

    #[regex(r"[^{]+")]
    Text,

    // A brace that does not open a complete tag
    #[token("{")]
    Brace,
}

impl From<LogosDocToken> for DocTokenKind {
    fn from(token: LogosDocToken) -> Self {
        match token {
            LogosDocToken::Link => DocTokenKind::Link,
            LogosDocToken::Code => DocTokenKind::Code,
            LogosDocToken::Text | LogosDocToken::Brace => DocTokenKind::Text,
        }
    }
}
