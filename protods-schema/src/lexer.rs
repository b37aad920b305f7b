//! Tokenizer for `.proto` text.
//!
//! Comments are not emitted as tokens. A comment block that ends on the line
//! directly above a token (or on the same line, before it) is attached to
//! that token as its leading comment. Comments trailing a token on the same
//! line are dropped.

use miette::SourceSpan;

use crate::{Comment, Result, error::SourceContext};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// Identifier, possibly dotted (`foo.bar.Baz`, `.foo.Bar`).
    Ident(String),
    /// Numeric literal as written.
    Number(String),
    /// String literal with quotes removed and escapes resolved.
    Str(String),
    Symbol(char),
}

#[derive(Debug, Clone)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
    pub len: usize,
    pub comment: Option<Comment>,
}

impl Token {
    pub fn span(&self) -> SourceSpan {
        (self.offset, self.len).into()
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Ident(s) | TokenKind::Number(s) | TokenKind::Str(s) => s.clone(),
            TokenKind::Symbol(c) => c.to_string(),
        }
    }

    pub fn is_symbol(&self, c: char) -> bool {
        self.kind == TokenKind::Symbol(c)
    }

    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) => Some(s),
            _ => None,
        }
    }
}

struct RawComment {
    lines: Vec<String>,
    start_line: usize,
    end_line: usize,
}

const SYMBOLS: &str = "{}[]()<>;=,:-+";

pub(crate) fn tokenize(ctx: &SourceContext) -> Result<Vec<Token>> {
    Lexer {
        ctx,
        src: ctx.src(),
        pos: 0,
        line: 1,
    }
    .run()
}

struct Lexer<'a> {
    ctx: &'a SourceContext,
    src: &'a str,
    pos: usize,
    line: usize,
}

impl Lexer<'_> {
    fn run(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut group: Vec<RawComment> = Vec::new();
        let mut prev_line: Option<usize> = None;

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };
            let start = self.pos;
            let line = self.line;

            if c == '/' && self.peek_at(1) == Some('/') {
                let comment = self.line_comment();
                collect_comment(&mut group, comment, prev_line);
                continue;
            }
            if c == '/' && self.peek_at(1) == Some('*') {
                let comment = self.block_comment()?;
                collect_comment(&mut group, comment, prev_line);
                continue;
            }

            let kind = if is_ident_start(c) || (c == '.' && self.peek_at(1).is_some_and(is_ident_start))
            {
                TokenKind::Ident(self.ident())
            } else if c.is_ascii_digit() {
                TokenKind::Number(self.number())
            } else if c == '"' || c == '\'' {
                TokenKind::Str(self.string()?)
            } else if SYMBOLS.contains(c) {
                self.bump();
                TokenKind::Symbol(c)
            } else {
                return Err(self.ctx.syntax_error(
                    format!("unexpected character '{c}'"),
                    "unexpected character",
                    (start, c.len_utf8()),
                ));
            };

            tokens.push(Token {
                kind,
                offset: start,
                len: self.pos - start,
                comment: take_leading(&mut group, line),
            });
            prev_line = Some(line);
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn line_comment(&mut self) -> RawComment {
        let line = self.line;
        self.pos += 2;
        let start = self.pos;
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump();
        }
        let text = self.src[start..self.pos].trim_start_matches('/');
        RawComment {
            lines: vec![text.to_string()],
            start_line: line,
            end_line: line,
        }
    }

    fn block_comment(&mut self) -> Result<RawComment> {
        let start_line = self.line;
        let open = self.pos;
        self.pos += 2;
        let start = self.pos;
        loop {
            if self.src[self.pos..].starts_with("*/") {
                break;
            }
            if self.bump().is_none() {
                return Err(self.ctx.syntax_error(
                    "unterminated block comment",
                    "comment starts here",
                    (open, 2),
                ));
            }
        }
        let body = &self.src[start..self.pos];
        self.pos += 2;

        let lines = body
            .lines()
            .map(|l| {
                let l = l.trim_start();
                l.strip_prefix('*').unwrap_or(l).to_string()
            })
            .collect();
        Ok(RawComment {
            lines,
            start_line,
            end_line: self.line,
        })
    }

    fn ident(&mut self) -> String {
        let start = self.pos;
        if self.peek() == Some('.') {
            self.bump();
        }
        while let Some(c) = self.peek() {
            if is_ident_char(c) || (c == '.' && self.peek_at(1).is_some_and(is_ident_start)) {
                self.bump();
            } else {
                break;
            }
        }
        self.src[start..self.pos].to_string()
    }

    fn number(&mut self) -> String {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.')
        {
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    fn string(&mut self) -> Result<String> {
        let open = self.pos;
        let quote = self.bump();
        let mut value = String::new();
        loop {
            let c = match self.bump() {
                Some('\n') | None => {
                    return Err(self.ctx.syntax_error(
                        "unterminated string literal",
                        "string starts here",
                        (open, 1),
                    ));
                }
                Some(c) => c,
            };
            if Some(c) == quote {
                return Ok(value);
            }
            if c == '\\' {
                match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(escaped) => value.push(escaped),
                    None => {
                        return Err(self.ctx.syntax_error(
                            "unterminated string literal",
                            "string starts here",
                            (open, 1),
                        ));
                    }
                }
            } else {
                value.push(c);
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn collect_comment(group: &mut Vec<RawComment>, comment: RawComment, prev_line: Option<usize>) {
    // Trailing comment on the line of the previous token.
    if prev_line == Some(comment.start_line) {
        group.clear();
        return;
    }
    if group
        .last()
        .is_some_and(|last| comment.start_line > last.end_line + 1)
    {
        group.clear();
    }
    group.push(comment);
}

fn take_leading(group: &mut Vec<RawComment>, line: usize) -> Option<Comment> {
    let last_end = group.last()?.end_line;
    let group = std::mem::take(group);
    if line > last_end + 1 {
        return None;
    }
    Some(Comment {
        lines: group.into_iter().flat_map(|c| c.lines).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<Token> {
        tokenize(&SourceContext::new(src, "test.proto")).expect("lex should succeed")
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_basic_tokens() {
        assert_eq!(
            kinds("map<string, Example> map_field = 2;"),
            vec![
                TokenKind::Ident("map".into()),
                TokenKind::Symbol('<'),
                TokenKind::Ident("string".into()),
                TokenKind::Symbol(','),
                TokenKind::Ident("Example".into()),
                TokenKind::Symbol('>'),
                TokenKind::Ident("map_field".into()),
                TokenKind::Symbol('='),
                TokenKind::Number("2".into()),
                TokenKind::Symbol(';'),
            ]
        );
    }

    #[test]
    fn test_dotted_identifiers() {
        assert_eq!(
            kinds("package foo.bar; .foo.Bar"),
            vec![
                TokenKind::Ident("package".into()),
                TokenKind::Ident("foo.bar".into()),
                TokenKind::Symbol(';'),
                TokenKind::Ident(".foo.Bar".into()),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            kinds(r#"syntax = "pro\"to3";"#)[2],
            TokenKind::Str("pro\"to3".into())
        );
        assert_eq!(kinds("'single'")[0], TokenKind::Str("single".into()));
    }

    #[test]
    fn test_leading_line_comment_attached() {
        let tokens = lex("// Hello is a hello message.\nmessage Hello {}");
        let comment = tokens[0].comment.as_ref().expect("comment attached");
        assert_eq!(comment.message(), "Hello is a hello message.");
        assert!(tokens[1].comment.is_none());
    }

    #[test]
    fn test_multi_line_comment_group() {
        let tokens = lex("// first\n// second\nmessage A {}");
        let comment = tokens[0].comment.as_ref().unwrap();
        assert_eq!(comment.message(), "first\nsecond");
    }

    #[test]
    fn test_detached_comment_dropped() {
        let tokens = lex("// license header\n\nmessage A {}");
        assert!(tokens[0].comment.is_none());
    }

    #[test]
    fn test_trailing_comment_dropped() {
        let tokens = lex("string a = 1; // about a\nstring b = 2;");
        let b = tokens
            .iter()
            .find(|t| t.ident() == Some("string") && t.offset > 0)
            .unwrap();
        assert!(b.comment.is_none());
    }

    #[test]
    fn test_block_comment() {
        let tokens = lex("/*\n * A block\n * comment.\n */\nmessage A {}");
        let comment = tokens[0].comment.as_ref().unwrap();
        assert_eq!(comment.message(), "A block\ncomment.");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize(&SourceContext::new("/* never closed", "t.proto")).unwrap_err();
        assert!(err.to_string().contains("unterminated block comment"));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize(&SourceContext::new("syntax = \"proto3;\n", "t.proto")).unwrap_err();
        assert!(err.to_string().contains("unterminated string"));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize(&SourceContext::new("message A { # }", "t.proto")).unwrap_err();
        assert_eq!(err.to_string(), "unexpected character '#'");
        assert_eq!(err.span(), Some((12, 1).into()));
    }

    #[test]
    fn test_spans() {
        let tokens = lex("message Hello");
        assert_eq!(tokens[1].span(), (8, 5).into());
        assert_eq!(tokens[1].end(), 13);
    }
}
