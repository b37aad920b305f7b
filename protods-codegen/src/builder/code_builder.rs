//! Indented Go text from rendered fragments.

use super::{CodeFragment, Renderable};

/// Accumulates generated Go source, indenting nested blocks with one tab per
/// level the way `gofmt` writes them.
///
/// # Example
///
/// ```
/// use protods_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::go();
/// builder
///     .fragment(CodeFragment::comment("Hello says hello."))
///     .fragment(CodeFragment::block(
///         "func Hello() {",
///         vec![CodeFragment::line("println(\"hello\")")],
///     ));
///
/// assert_eq!(
///     builder.build(),
///     "// Hello says hello.\nfunc Hello() {\n\tprintln(\"hello\")\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at the top level.
    pub fn go() -> Self {
        Self::default()
    }

    /// Render every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.fragment(fragment);
        }
        self
    }

    /// Render a single fragment at the current depth.
    pub fn fragment(&mut self, fragment: CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => self.write_line(&s),
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Comment(text) => {
                for line in text.lines() {
                    if line.is_empty() {
                        self.write_line("//");
                    } else {
                        self.write_line(&format!("// {line}"));
                    }
                }
            }
            CodeFragment::Block { header, body } => {
                self.write_line(&header);
                self.depth += 1;
                for f in body {
                    self.fragment(f);
                }
                self.depth -= 1;
                self.write_line("}");
            }
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_line(&mut self, s: &str) {
        for _ in 0..self.depth {
            self.buffer.push('\t');
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}
