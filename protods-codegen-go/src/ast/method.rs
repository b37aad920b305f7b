//! Go function and method builders.

use protods_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Builder for Go functions and methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    receiver: Option<String>,
    params: Vec<Param>,
    returns: Option<String>,
    doc: Option<String>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            returns: None,
            doc: None,
            body: Vec::new(),
        }
    }

    /// Set the receiver (e.g., `m *Hello`).
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Append a single body line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Append an arbitrary body fragment (e.g., an [`if_block`]).
    pub fn body(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    /// Parameter list and result, without `func` or the name.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");

        match &self.returns {
            Some(ret) => format!("({params}) {ret}"),
            None => format!("({params})"),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let receiver = self
            .receiver
            .as_ref()
            .map(|r| format!("({r}) "))
            .unwrap_or_default();
        format!("func {receiver}{}{} {{", self.name, self.signature())
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::comment(doc));
        }
        fragments.push(CodeFragment::block(self.header(), self.body.clone()));
        fragments
    }
}

/// An `if <condition> { ... }` statement.
pub fn if_block(condition: impl AsRef<str>, body: Vec<CodeFragment>) -> CodeFragment {
    CodeFragment::block(format!("if {} {{", condition.as_ref()), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_with_receiver() {
        let m = Method::new("SetSubject")
            .receiver("m *Hello")
            .param("val", "string")
            .doc("SetSubject sets the subject field.")
            .body_line("m.Subject = val")
            .build();

        assert_eq!(
            m,
            "// SetSubject sets the subject field.\n\
             func (m *Hello) SetSubject(val string) {\n\
             \tm.Subject = val\n\
             }\n"
        );
    }

    #[test]
    fn test_signature() {
        let m = Method::new("ForEach")
            .param("cb", "func(key string, val int32) bool")
            .returns("bool");
        assert_eq!(m.signature(), "(cb func(key string, val int32) bool) bool");
        assert_eq!(Method::new("Reset").signature(), "()");
    }

    #[test]
    fn test_nested_if_block() {
        let m = Method::new("Get")
            .receiver("m StringInt32Map")
            .param("key", "string")
            .returns("int32")
            .body(if_block(
                "m == nil",
                vec![
                    CodeFragment::line("var zero int32"),
                    CodeFragment::line("return zero"),
                ],
            ))
            .body_line("return m[key]")
            .build();

        assert_eq!(
            m,
            "func (m StringInt32Map) Get(key string) int32 {\n\
             \tif m == nil {\n\
             \t\tvar zero int32\n\
             \t\treturn zero\n\
             \t}\n\
             \treturn m[key]\n\
             }\n"
        );
    }
}
