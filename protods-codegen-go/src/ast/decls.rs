//! Top-level type and variable declarations.

use protods_codegen::builder::{CodeFragment, Renderable};

/// A named map type (e.g., `type StringExampleMap map[string]*Example`).
#[derive(Debug, Clone)]
pub struct MapTypeDecl {
    name: String,
    key: String,
    value: String,
    doc: Option<String>,
}

impl MapTypeDecl {
    pub fn new(name: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// The underlying Go map type, e.g. `map[string]*Example`.
    pub fn underlying(&self) -> String {
        format!("map[{}]{}", self.key, self.value)
    }
}

impl Renderable for MapTypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self.doc.iter().map(CodeFragment::comment).collect();
        fragments.push(CodeFragment::line(format!(
            "type {} {}",
            self.name,
            self.underlying()
        )));
        fragments
    }
}

/// Compile-time check that a type satisfies an interface.
#[derive(Debug, Clone)]
pub struct TypeAssertion {
    interface: String,
    value: String,
}

impl TypeAssertion {
    /// `var _ <interface> = <value>`
    pub fn new(interface: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            value: value.into(),
        }
    }
}

impl Renderable for TypeAssertion {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::comment("_ is a type assertion"),
            CodeFragment::line(format!("var _ {} = {}", self.interface, self.value)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use protods_codegen::builder::CodeBuilder;

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_map_type_decl() {
        let decl = MapTypeDecl::new("StringExampleMap", "string", "*Example")
            .doc("StringExampleMap satisfies IStringExampleMap.");
        assert_eq!(decl.underlying(), "map[string]*Example");
        assert_eq!(
            render(&decl),
            "// StringExampleMap satisfies IStringExampleMap.\n\
             type StringExampleMap map[string]*Example\n"
        );
    }

    #[test]
    fn test_type_assertion() {
        assert_eq!(
            render(&TypeAssertion::new("IHello", "&Hello{}")),
            "// _ is a type assertion\nvar _ IHello = &Hello{}\n"
        );
    }
}
