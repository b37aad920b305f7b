//! File and message definitions.

use protods_core::ABSTRACTION_MARKER;
use serde::Serialize;

use crate::{Field, MapType};

/// A message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Declared name.
    pub name: String,
    /// Name of the abstraction (interface) type.
    pub inter_name: String,
    pub comment: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            inter_name: format!("{ABSTRACTION_MARKER}{name}"),
            name,
            comment: None,
            fields: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

/// A fully built schema file, ready for emission.
///
/// `messages` is sorted by name and `maps` by canonical type name; generators
/// rely on this order for byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    pub package: String,
    pub messages: Vec<Message>,
    pub maps: Vec<MapType>,
}

impl File {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    /// Look up a message by declared name.
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Look up a map type by canonical name.
    pub fn map_type(&self, type_name: &str) -> Option<&MapType> {
        self.maps.iter().find(|m| m.type_name == type_name)
    }
}
