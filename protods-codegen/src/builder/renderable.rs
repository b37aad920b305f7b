//! Fragments produced by AST nodes.
//!
//! Nodes describe their output as [`CodeFragment`]s and never touch
//! indentation; [`CodeBuilder`](super::CodeBuilder) lays them out.

/// A piece of generated Go source.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; a newline is appended.
    Line(String),
    /// An empty line.
    Blank,
    /// `header`, the body one level deeper, then a closing `}`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
    /// A `//` line comment; multi-line text becomes one comment line per line.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// A brace block, e.g. a function, an `if` or a `for` loop.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that render to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constructor() {
        assert_eq!(
            CodeFragment::block("if m == nil {", vec![CodeFragment::line("return nil")]),
            CodeFragment::Block {
                header: "if m == nil {".to_string(),
                body: vec![CodeFragment::Line("return nil".to_string())],
            }
        );
    }
}
