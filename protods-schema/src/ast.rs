//! Schema AST produced by the parser.
//!
//! Only the declarations the interface generator cares about are modelled in
//! detail (package, messages, plain and map fields). Everything else is kept
//! as an [`Other`] node so consumers can report what they skip.

use miette::SourceSpan;

/// A parsed `.proto` file.
#[derive(Debug, Clone, PartialEq)]
pub struct Proto {
    /// Name used for error reporting (usually the file name).
    pub filename: String,
    /// Top-level declarations in source order.
    pub elements: Vec<Element>,
}

impl Proto {
    /// Iterate over the top-level message declarations.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.elements.iter().filter_map(|e| match e {
            Element::Message(m) => Some(m),
            _ => None,
        })
    }

    /// The last package declaration, if any.
    pub fn package(&self) -> Option<&Package> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Package(p) => Some(p),
                _ => None,
            })
            .last()
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Syntax(Syntax),
    Package(Package),
    Import(Import),
    Option(OptionDecl),
    Message(Message),
    /// `enum`, `service` and `extend` blocks, kept by name only.
    Other(Other),
}

/// `syntax = "proto3";` or `edition = "2023";`
#[derive(Debug, Clone, PartialEq)]
pub struct Syntax {
    pub value: String,
    pub span: SourceSpan,
}

/// `package foo.bar;`
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub span: SourceSpan,
}

/// `import "other.proto";`
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub span: SourceSpan,
}

/// `option name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    pub name: String,
    /// The constant as written (strings are unquoted).
    pub value: String,
    pub span: SourceSpan,
}

/// `message Name { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub name: String,
    pub comment: Option<Comment>,
    pub elements: Vec<MessageElement>,
    pub span: SourceSpan,
}

/// A declaration inside a message body.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageElement {
    Field(NormalField),
    Map(MapField),
    /// `oneof`, nested messages, options, reserved ranges and the like.
    Other(Other),
}

/// Field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Optional,
    Required,
    Repeated,
}

impl Label {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "optional" => Some(Label::Optional),
            "required" => Some(Label::Required),
            "repeated" => Some(Label::Repeated),
            _ => None,
        }
    }
}

/// `repeated string tags = 3;`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalField {
    pub name: String,
    /// Type as written (e.g., `string`, `Example`, `foo.Bar`).
    pub ty: String,
    pub number: u32,
    pub label: Option<Label>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl NormalField {
    pub fn is_repeated(&self) -> bool {
        self.label == Some(Label::Repeated)
    }
}

/// `map<string, Example> map_field = 2;`
#[derive(Debug, Clone, PartialEq)]
pub struct MapField {
    pub name: String,
    pub key_type: String,
    pub value_type: String,
    pub number: u32,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

/// A declaration the AST keeps only by kind and name.
#[derive(Debug, Clone, PartialEq)]
pub struct Other {
    /// Leading keyword (e.g., "oneof", "enum", "reserved").
    pub kind: String,
    pub name: Option<String>,
    pub span: SourceSpan,
}

/// A comment block directly above a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment lines without the comment delimiters.
    pub lines: Vec<String>,
}

impl Comment {
    /// The comment text: each line trimmed, outer blank lines dropped.
    pub fn message(&self) -> String {
        let lines: Vec<&str> = self.lines.iter().map(|l| l.trim()).collect();
        let start = lines.iter().position(|l| !l.is_empty());
        let end = lines.iter().rposition(|l| !l.is_empty());
        match (start, end) {
            (Some(start), Some(end)) => lines[start..=end].join("\n"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_message_trims_lines() {
        let comment = Comment {
            lines: vec!["".into(), " Hello is a".into(), "  hello message. ".into(), " ".into()],
        };
        assert_eq!(comment.message(), "Hello is a\nhello message.");
    }

    #[test]
    fn test_empty_comment_message() {
        let comment = Comment {
            lines: vec!["   ".into()],
        };
        assert_eq!(comment.message(), "");
    }

    #[test]
    fn test_label_parse() {
        assert_eq!(Label::parse("repeated"), Some(Label::Repeated));
        assert_eq!(Label::parse("optional"), Some(Label::Optional));
        assert_eq!(Label::parse("required"), Some(Label::Required));
        assert_eq!(Label::parse("string"), None);
    }
}
