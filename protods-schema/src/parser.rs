//! Recursive-descent parser from tokens to the schema AST.

use miette::SourceSpan;

use crate::{
    Element, Import, Label, MapField, Message, MessageElement, NormalField, OptionDecl, Other,
    Package, Proto, Result, Syntax,
    error::SourceContext,
    lexer::{Token, TokenKind, tokenize},
};

/// Parse schema text into a [`Proto`].
pub(crate) fn parse(ctx: &SourceContext) -> Result<Proto> {
    let tokens = tokenize(ctx)?;
    let mut parser = Parser {
        ctx,
        tokens,
        pos: 0,
    };
    let elements = parser.parse_elements()?;
    tracing::debug!(
        filename = ctx.filename(),
        elements = elements.len(),
        "parsed schema"
    );
    Ok(Proto {
        filename: ctx.filename().to_string(),
        elements,
    })
}

struct Parser<'a> {
    ctx: &'a SourceContext,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn parse_elements(&mut self) -> Result<Vec<Element>> {
        let mut elements = Vec::new();

        while let Some(tok) = self.peek().cloned() {
            if tok.is_symbol(';') {
                self.pos += 1;
                continue;
            }
            let element = match tok.ident() {
                Some("syntax" | "edition") => Element::Syntax(self.parse_syntax()?),
                Some("package") => Element::Package(self.parse_package()?),
                Some("import") => Element::Import(self.parse_import()?),
                Some("option") => Element::Option(self.parse_option()?),
                Some("message") => Element::Message(self.parse_message()?),
                Some("enum" | "service" | "extend") => Element::Other(self.parse_other_block()?),
                _ => return Err(self.unexpected(&tok, "a top-level declaration")),
            };
            elements.push(element);
        }

        Ok(elements)
    }

    fn parse_syntax(&mut self) -> Result<Syntax> {
        let start = self.advance()?;
        self.expect_symbol('=')?;
        let value = self.expect_string()?;
        let end = self.expect_symbol(';')?;
        Ok(Syntax {
            value,
            span: span_between(&start, &end),
        })
    }

    fn parse_package(&mut self) -> Result<Package> {
        let start = self.advance()?;
        let name = self.expect_ident("package name")?;
        let end = self.expect_symbol(';')?;
        Ok(Package {
            name,
            span: span_between(&start, &end),
        })
    }

    fn parse_import(&mut self) -> Result<Import> {
        let start = self.advance()?;
        if matches!(self.peek_ident(), Some("public" | "weak")) {
            self.pos += 1;
        }
        let path = self.expect_string()?;
        let end = self.expect_symbol(';')?;
        Ok(Import {
            path,
            span: span_between(&start, &end),
        })
    }

    fn parse_option(&mut self) -> Result<OptionDecl> {
        let start = self.advance()?;
        let mut name = String::new();
        loop {
            let tok = self.advance()?;
            if tok.is_symbol('=') {
                break;
            }
            name.push_str(&tok.text());
        }
        let (value, end) = self.collect_until_semicolon()?;
        Ok(OptionDecl {
            name,
            value,
            span: span_between(&start, &end),
        })
    }

    fn parse_message(&mut self) -> Result<Message> {
        let start = self.advance()?;
        let name = self.expect_ident("message name")?;
        self.expect_symbol('{')?;

        let mut elements = Vec::new();
        let end = loop {
            let tok = self.peek_or_eof()?;
            if tok.is_symbol('}') {
                break self.advance()?;
            }
            if tok.is_symbol(';') {
                self.pos += 1;
                continue;
            }
            let is_map = tok.ident() == Some("map")
                && self.peek_nth(1).is_some_and(|t| t.is_symbol('<'));
            let element = match tok.ident() {
                Some("message" | "enum" | "oneof" | "extend") => {
                    MessageElement::Other(self.parse_other_block()?)
                }
                Some("option" | "reserved" | "extensions") => {
                    MessageElement::Other(self.parse_other_statement()?)
                }
                Some(_) if is_map => MessageElement::Map(self.parse_map_field()?),
                Some(_) => self.parse_field()?,
                None => return Err(self.unexpected(&tok, "a field or declaration")),
            };
            elements.push(element);
        };

        Ok(Message {
            name,
            comment: start.comment.clone(),
            elements,
            span: span_between(&start, &end),
        })
    }

    fn parse_field(&mut self) -> Result<MessageElement> {
        let start = self.peek_or_eof()?;
        let label = start.ident().and_then(Label::parse);
        if label.is_some() {
            self.pos += 1;
        }

        let ty = self.expect_ident("field type")?;
        if ty == "group" {
            // proto2 group: `repeated group Name = 1 { ... }`
            let name = self.expect_ident("group name")?;
            self.expect_symbol('=')?;
            self.expect_number()?;
            self.skip_options()?;
            let end = self.skip_block()?;
            return Ok(MessageElement::Other(Other {
                kind: "group".into(),
                name: Some(name),
                span: span_between(&start, &end),
            }));
        }

        let name = self.expect_ident("field name")?;
        self.expect_symbol('=')?;
        let number = self.expect_number()?;
        self.skip_options()?;
        let end = self.expect_symbol(';')?;

        Ok(MessageElement::Field(NormalField {
            name,
            ty,
            number,
            label,
            comment: start.comment.clone(),
            span: span_between(&start, &end),
        }))
    }

    fn parse_map_field(&mut self) -> Result<MapField> {
        let start = self.advance()?;
        self.expect_symbol('<')?;
        let key_type = self.expect_ident("map key type")?;
        self.expect_symbol(',')?;
        let value_type = self.expect_ident("map value type")?;
        self.expect_symbol('>')?;
        let name = self.expect_ident("field name")?;
        self.expect_symbol('=')?;
        let number = self.expect_number()?;
        self.skip_options()?;
        let end = self.expect_symbol(';')?;

        Ok(MapField {
            name,
            key_type,
            value_type,
            number,
            comment: start.comment.clone(),
            span: span_between(&start, &end),
        })
    }

    /// `keyword [name] { ... }`, kept only by kind and name.
    fn parse_other_block(&mut self) -> Result<Other> {
        let start = self.advance()?;
        let kind = start.text();
        let name = match self.peek_ident() {
            Some(name) => {
                let name = name.to_string();
                self.pos += 1;
                Some(name)
            }
            None => None,
        };
        let end = self.skip_block()?;
        Ok(Other {
            kind,
            name,
            span: span_between(&start, &end),
        })
    }

    /// `keyword ... ;`, kept only by kind.
    fn parse_other_statement(&mut self) -> Result<Other> {
        let start = self.advance()?;
        let (_, end) = self.collect_until_semicolon()?;
        Ok(Other {
            kind: start.text(),
            name: None,
            span: span_between(&start, &end),
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    fn peek_ident(&self) -> Option<&str> {
        self.peek().and_then(Token::ident)
    }

    fn peek_or_eof(&self) -> Result<Token> {
        self.peek().cloned().ok_or_else(|| self.eof_error())
    }

    fn advance(&mut self) -> Result<Token> {
        let tok = self.peek_or_eof()?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect_symbol(&mut self, c: char) -> Result<Token> {
        let tok = self.advance()?;
        if tok.is_symbol(c) {
            Ok(tok)
        } else {
            Err(self.unexpected(&tok, &format!("'{c}'")))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<String> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Err(self.unexpected(&tok, what)),
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        let tok = self.advance()?;
        match tok.kind {
            TokenKind::Str(value) => Ok(value),
            _ => Err(self.unexpected(&tok, "a string literal")),
        }
    }

    fn expect_number(&mut self) -> Result<u32> {
        let tok = self.advance()?;
        let TokenKind::Number(text) = &tok.kind else {
            return Err(self.unexpected(&tok, "a field number"));
        };
        parse_field_number(text).ok_or_else(|| {
            self.ctx.syntax_error(
                format!("invalid field number '{text}'"),
                "invalid field number",
                tok.span(),
            )
        })
    }

    /// Skip a `[ ... ]` field option list if present.
    fn skip_options(&mut self) -> Result<()> {
        if !self.peek().is_some_and(|t| t.is_symbol('[')) {
            return Ok(());
        }
        let mut depth = 0usize;
        loop {
            let tok = self.advance()?;
            if tok.is_symbol('[') {
                depth += 1;
            } else if tok.is_symbol(']') {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
        }
    }

    /// Skip a brace-balanced `{ ... }` block, returning the closing brace.
    fn skip_block(&mut self) -> Result<Token> {
        self.expect_symbol('{')?;
        let mut depth = 1usize;
        loop {
            let tok = self.advance()?;
            if tok.is_symbol('{') {
                depth += 1;
            } else if tok.is_symbol('}') {
                depth -= 1;
                if depth == 0 {
                    return Ok(tok);
                }
            }
        }
    }

    /// Collect token text up to the next top-level `;`, returning the text and
    /// the `;` token.
    fn collect_until_semicolon(&mut self) -> Result<(String, Token)> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            let tok = self.advance()?;
            match tok.kind {
                TokenKind::Symbol(';') if depth == 0 => return Ok((text, tok)),
                TokenKind::Symbol('{' | '[' | '(') => depth += 1,
                TokenKind::Symbol('}' | ']' | ')') => depth = depth.saturating_sub(1),
                _ => {}
            }
            text.push_str(&tok.text());
        }
    }

    fn unexpected(&self, tok: &Token, expected: &str) -> Box<crate::Error> {
        self.ctx.syntax_error(
            format!("expected {expected}, found '{}'", tok.text()),
            "unexpected token",
            tok.span(),
        )
    }

    fn eof_error(&self) -> Box<crate::Error> {
        let len = self.ctx.src().len();
        self.ctx
            .syntax_error("unexpected end of file", "input ends here", (len, 0))
    }
}

fn span_between(start: &Token, end: &Token) -> SourceSpan {
    (start.offset, end.end() - start.offset).into()
}

fn parse_field_number(text: &str) -> Option<u32> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if text.len() > 1 && text.starts_with('0') {
        u32::from_str_radix(&text[1..], 8).ok()
    } else {
        text.parse().ok()
    }
}
