//! Message interfaces and accessor methods.

use eyre::{Result, eyre};
use protods_codegen::{builder::CodeFragment, language::TypeMapper};
use protods_ir::{Field, FieldType, File, Message, TypeRef};

use super::maps::GoMap;
use crate::{
    GoTypeMapper,
    ast::{GoFile, Interface, InterfaceMethod, Method, TypeAssertion, if_block},
};

/// How one field is exposed through the message interface.
enum Accessor<'a> {
    /// Plain value: the binding's getter plus a generated setter.
    Plain { ty: String },
    /// Map field, exposed as a map abstraction.
    Map(GoMap<'a>),
    /// Singular message field, exposed as the message's abstraction.
    Message(&'a TypeRef),
}

impl<'a> Accessor<'a> {
    fn new(file: &'a File, field: &'a Field) -> Result<Self> {
        let mapper = GoTypeMapper;
        Ok(match &field.ty {
            FieldType::Scalar { name } if field.repeated => {
                let element = if file.message(name).is_some() {
                    mapper.map_reference(name)
                } else {
                    mapper.map_scalar(name).to_string()
                };
                Self::Plain {
                    ty: mapper.map_repeated(&element),
                }
            }
            FieldType::Scalar { name } => Self::Plain {
                ty: mapper.map_scalar(name).to_string(),
            },
            FieldType::Map { type_name } => {
                let map = file.map_type(type_name).ok_or_else(|| {
                    eyre!("map type `{type_name}` not found for field `{}`", field.name)
                })?;
                Self::Map(GoMap::new(map))
            }
            FieldType::Message { target } => Self::Message(target),
        })
    }

    /// Type as seen through the interface.
    fn inter_type(&self) -> &str {
        match self {
            Self::Plain { ty } => ty.as_str(),
            Self::Map(map) => map.inter_name(),
            Self::Message(target) => target.inter_name.as_str(),
        }
    }
}

/// Append the interface, conversion helper, accessors and type assertion
/// for one message.
pub(crate) fn push_message(go: &mut GoFile, file: &File, message: &Message) -> Result<()> {
    let accessors = message
        .fields
        .iter()
        .map(|field| Accessor::new(file, field).map(|accessor| (field, accessor)))
        .collect::<Result<Vec<_>>>()?;

    let inter = &message.inter_name;
    let receiver = format!("m *{}", message.name);

    let mut interface = Interface::new(inter).doc(format!(
        "{inter} is the interface type for {}.",
        message.name
    ));
    if let Some(comment) = &message.comment {
        interface = interface.doc(comment);
    }
    for (field, accessor) in &accessors {
        interface = interface_methods(field, accessor)
            .into_iter()
            .fold(interface, Interface::method_with);
    }
    go.push_decl(interface);

    go.push_decl(
        Method::new(format!("To{inter}"))
            .doc(format!("To{inter} returns m as an {inter}."))
            .receiver(&receiver)
            .returns(inter)
            .body_line("return m"),
    );

    for (field, accessor) in &accessors {
        for method in accessor_methods(field, accessor) {
            go.push_decl(method.receiver(&receiver));
        }
    }

    go.push_decl(TypeAssertion::new(inter, format!("&{}{{}}", message.name)));
    Ok(())
}

fn interface_methods(field: &Field, accessor: &Accessor<'_>) -> Vec<InterfaceMethod> {
    let f = &field.camel_name;
    let ty = accessor.inter_type();

    let getter = match accessor {
        Accessor::Plain { .. } => format!("Get{f}() {ty}"),
        Accessor::Map(_) | Accessor::Message(_) => format!("Get{f}Inter() {ty}"),
    };
    let mut methods = vec![
        InterfaceMethod::new(getter).comment(field.comment.clone()),
        InterfaceMethod::new(format!("Set{f}(val {ty})")),
    ];
    if !matches!(accessor, Accessor::Plain { .. }) {
        methods.push(InterfaceMethod::new(format!("New{f}() {ty}")));
    }
    methods
}

fn accessor_methods(field: &Field, accessor: &Accessor<'_>) -> Vec<Method> {
    let f = &field.camel_name;
    let name = &field.name;
    let ty = accessor.inter_type();

    let setter = Method::new(format!("Set{f}"))
        .doc(format!("Set{f} sets the {name} field."))
        .param("val", ty);

    let (alloc, get_inter, set_body) = match accessor {
        Accessor::Plain { .. } => return vec![setter.body_line(format!("m.{f} = val"))],
        Accessor::Map(map) => (
            format!("{}{{}}", map.concrete_name()),
            vec![CodeFragment::line(format!(
                "return {}(m.Get{f}())",
                map.concrete_name()
            ))],
            format!(
                "m.{f} = ({})(val.({}))",
                map.decl().underlying(),
                map.concrete_name()
            ),
        ),
        Accessor::Message(target) => (
            format!("&{}{{}}", target.name),
            vec![
                if_block(
                    format!("v := m.Get{f}(); v != nil"),
                    vec![CodeFragment::line("return v")],
                ),
                CodeFragment::line("return nil"),
            ],
            format!("m.{f} = val.(*{})", target.name),
        ),
    };

    let new = Method::new(format!("New{f}"))
        .doc(format!("New{f} returns a new, empty {name} value."))
        .returns(ty)
        .body_line(format!("return {alloc}"));

    let get_inter = get_inter.into_iter().fold(
        Method::new(format!("Get{f}Inter"))
            .doc(format!("Get{f}Inter returns the {name} field as an {ty}."))
            .returns(ty),
        Method::body,
    );

    let setter = setter
        .body(if_block(
            "val == nil",
            vec![
                CodeFragment::line(format!("m.{f} = nil")),
                CodeFragment::line("return"),
            ],
        ))
        .body_line(set_body);

    vec![new, get_inter, setter]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(file: &File) -> String {
        let mut go = GoFile::new(&file.package);
        for message in &file.messages {
            push_message(&mut go, file, message).unwrap();
        }
        go.build()
    }

    #[test]
    fn test_empty_message() {
        let file = File {
            package: "demo".into(),
            messages: vec![Message::new("Example")],
            maps: vec![],
        };
        let out = render(&file);
        assert!(out.contains("type IExample interface{}\n"));
        assert!(out.contains("func (m *Example) ToIExample() IExample {\n\treturn m\n}\n"));
        assert!(out.ends_with("var _ IExample = &Example{}\n"));
    }

    #[test]
    fn test_message_field_accessors() {
        let mut outer = Message::new("Outer");
        outer.fields.push(Field::new(
            "inner",
            FieldType::Message {
                target: TypeRef::new("Inner"),
            },
        ));
        let file = File {
            package: "demo".into(),
            messages: vec![Message::new("Inner"), outer],
            maps: vec![],
        };
        let out = render(&file);

        assert!(out.contains("\tGetInnerInter() IInner\n\tSetInner(val IInner)\n\tNewInner() IInner\n"));
        assert!(out.contains("func (m *Outer) NewInner() IInner {\n\treturn &Inner{}\n}\n"));
        assert!(out.contains(
            "func (m *Outer) GetInnerInter() IInner {\n\
             \tif v := m.GetInner(); v != nil {\n\
             \t\treturn v\n\
             \t}\n\
             \treturn nil\n\
             }\n"
        ));
        assert!(out.contains(
            "func (m *Outer) SetInner(val IInner) {\n\
             \tif val == nil {\n\
             \t\tm.Inner = nil\n\
             \t\treturn\n\
             \t}\n\
             \tm.Inner = val.(*Inner)\n\
             }\n"
        ));
    }

    #[test]
    fn test_repeated_fields() {
        let mut msg = Message::new("Batch");
        msg.fields
            .push(Field::new("ids", FieldType::scalar("uint64")).repeated(true));
        msg.fields
            .push(Field::new("items", FieldType::scalar("Batch")).repeated(true));
        let file = File {
            package: "demo".into(),
            messages: vec![msg],
            maps: vec![],
        };
        let out = render(&file);

        assert!(out.contains("\tGetIds() []uint64\n\tSetIds(val []uint64)\n"));
        assert!(out.contains("\tGetItems() []*Batch\n\tSetItems(val []*Batch)\n"));
        assert!(out.contains("func (m *Batch) SetItems(val []*Batch) {\n\tm.Items = val\n}\n"));
        assert!(!out.contains("NewIds"));
    }

    #[test]
    fn test_missing_map_type_is_error() {
        let mut msg = Message::new("A");
        msg.fields.push(Field::new(
            "counts",
            FieldType::Map {
                type_name: "IStringInt32Map".into(),
            },
        ));
        let file = File {
            package: "demo".into(),
            messages: vec![msg],
            maps: vec![],
        };

        let mut go = GoFile::new("demo");
        let err = push_message(&mut go, &file, &file.messages[0]).unwrap_err();
        assert!(err.to_string().contains("IStringInt32Map"));
    }
}
