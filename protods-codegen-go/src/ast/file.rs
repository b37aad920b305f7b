//! A whole Go source file.

use protods_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Header placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "Code generated by protods. DO NOT EDIT.";

/// A Go source file: generated header, package clause and top-level
/// declarations separated by blank lines.
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    decls: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            decls: Vec::new(),
        }
    }

    /// Append a top-level declaration.
    pub fn decl(mut self, node: impl Renderable) -> Self {
        self.push_decl(node);
        self
    }

    pub fn push_decl(&mut self, node: impl Renderable) {
        self.decls.push(node.to_fragments());
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![
            CodeFragment::comment(GENERATED_HEADER),
            CodeFragment::blank(),
            CodeFragment::line(format!("package {}", self.package)),
        ];
        for decl in &self.decls {
            fragments.push(CodeFragment::blank());
            fragments.extend(decl.iter().cloned());
        }
        fragments
    }
}
