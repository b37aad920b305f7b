//! Map abstraction types and their concrete containers.

use protods_codegen::{builder::CodeFragment, language::TypeMapper};
use protods_ir::MapType;

use crate::{
    GoTypeMapper,
    ast::{GoFile, Interface, MapTypeDecl, Method, if_block},
};

/// Go spellings for one map shape.
pub(crate) struct GoMap<'a> {
    map: &'a MapType,
    /// Key type.
    pub key: &'a str,
    /// Value type as seen through the interface.
    pub value: String,
    /// Value type as stored in the concrete container.
    pub stored: String,
}

impl<'a> GoMap<'a> {
    pub fn new(map: &'a MapType) -> Self {
        let mapper = GoTypeMapper;
        let (value, stored) = match map.target() {
            Some(target) => (target.inter_name.clone(), mapper.map_reference(&target.name)),
            None => {
                let value = mapper.map_scalar(&map.value).to_string();
                (value.clone(), value)
            }
        };
        Self {
            map,
            key: mapper.map_scalar(&map.key),
            value,
            stored,
        }
    }

    pub fn inter_name(&self) -> &'a str {
        &self.map.type_name
    }

    pub fn concrete_name(&self) -> &'a str {
        self.map.concrete_name()
    }

    pub fn decl(&self) -> MapTypeDecl {
        MapTypeDecl::new(self.concrete_name(), self.key, &self.stored)
    }

    fn callback(&self) -> String {
        format!("func(key {}, val {}) bool", self.key, self.value)
    }
}

/// Append the interface, container type and methods for one map shape.
pub(crate) fn push_map(go: &mut GoFile, map: &MapType) {
    let m = GoMap::new(map);
    let inter = m.inter_name();
    let concrete = m.concrete_name();
    let receiver = format!("m {concrete}");

    go.push_decl(
        Interface::new(inter)
            .doc(format!(
                "{inter} is the map type for map<{}, {}>",
                map.key,
                map.value_type_name()
            ))
            .method(format!("Get(key {}) {}", m.key, m.value))
            .method(format!("Set(key {}, val {})", m.key, m.value))
            .method(format!("ForEach(cb {}) bool", m.callback())),
    );

    go.push_decl(m.decl().doc(format!("{concrete} satisfies {inter}.")));

    let get = Method::new("Get")
        .doc("Get returns a value from the map.")
        .receiver(&receiver)
        .param("key", m.key)
        .returns(&m.value);
    let get = match map.target() {
        Some(_) => get
            .body(if_block("m == nil", vec![CodeFragment::line("return nil")]))
            .body(if_block(
                "v := m[key]; v != nil",
                vec![CodeFragment::line("return v")],
            ))
            .body_line("return nil"),
        None => get
            .body(if_block(
                "m == nil",
                vec![
                    CodeFragment::line(format!("var zero {}", m.value)),
                    CodeFragment::line("return zero"),
                ],
            ))
            .body_line("return m[key]"),
    };
    go.push_decl(get);

    let set = Method::new("Set")
        .doc("Set sets a value in the map.")
        .receiver(&receiver)
        .param("key", m.key)
        .param("val", &m.value);
    let set = match map.target() {
        // A nil interface has no dynamic type to assert; it removes the entry.
        Some(_) => set
            .body(if_block(
                "val == nil",
                vec![
                    CodeFragment::line("delete(m, key)"),
                    CodeFragment::line("return"),
                ],
            ))
            .body_line(format!("m[key] = val.({})", m.stored)),
        None => set.body_line("m[key] = val"),
    };
    go.push_decl(set);

    let visit = if_block("!cb(k, v)", vec![CodeFragment::line("return false")]);
    let each = match map.target() {
        // Stored nil pointers reach the callback as a nil interface, as in Get.
        Some(_) => CodeFragment::block(
            "for k, p := range m {",
            vec![
                CodeFragment::line(format!("var v {}", m.value)),
                if_block("p != nil", vec![CodeFragment::line("v = p")]),
                visit,
            ],
        ),
        None => CodeFragment::block("for k, v := range m {", vec![visit]),
    };
    go.push_decl(
        Method::new("ForEach")
            .doc("ForEach iterates over the map, stopping early if cb returns false.")
            .receiver(&receiver)
            .param("cb", m.callback())
            .returns("bool")
            .body(each)
            .body_line("return true"),
    );
}
