//! Go interface builder.

use protods_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A method signature in a Go interface.
#[derive(Debug, Clone)]
pub struct InterfaceMethod {
    /// Full signature without the leading `func` (e.g., `Get(key string) IExample`).
    pub signature: String,
    pub comment: Option<String>,
}

impl InterfaceMethod {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

/// Builder for Go interface types.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Vec<String>,
    methods: Vec<InterfaceMethod>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a paragraph to the doc comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc.push(doc.into());
        self
    }

    /// Add a method signature.
    pub fn method(mut self, signature: impl Into<String>) -> Self {
        self.methods.push(InterfaceMethod::new(signature));
        self
    }

    /// Add a method with full configuration.
    pub fn method_with(mut self, method: InterfaceMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .flat_map(|method| {
                method
                    .comment
                    .iter()
                    .map(CodeFragment::comment)
                    .chain([CodeFragment::line(&method.signature)])
            })
            .collect()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self.doc.iter().map(CodeFragment::comment).collect();

        if self.methods.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} interface{{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("type {} interface {{", self.name),
                self.methods_to_fragments(),
            ));
        }
        fragments
    }
}
