//! Lower phase - scans the schema into an unresolved IR.
//!
//! Records the package, collects messages in declaration order and
//! registers one [`MapType`] per distinct map shape. Every field type is
//! still stored as declared; [`ResolvePhase`](super::ResolvePhase) decides
//! which names refer to messages.

use std::collections::BTreeMap;

use eyre::Result;
use indexmap::IndexMap;
use protods_ir::{Field, FieldType, File, MapType, Message};
use protods_schema::{self as ast, Element, MessageElement};

use crate::{
    BuildError,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

const PHASE: &str = "lower";

/// Phase that scans the parsed schema into an unresolved [`File`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Scan messages, fields and map shapes"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let proto = ctx.proto;
        let mut package: Option<&str> = None;
        let mut messages = Vec::new();
        let mut lookup: IndexMap<&str, usize> = IndexMap::new();
        let mut maps: BTreeMap<String, MapType> = BTreeMap::new();

        for element in &proto.elements {
            match element {
                Element::Package(p) => {
                    if package.is_some() {
                        ctx.add_warning(
                            PHASE,
                            format!("package declared more than once; using `{}`", p.name),
                        );
                    }
                    package = Some(p.name.as_str());
                }
                Element::Message(m) => {
                    if lookup.insert(m.name.as_str(), messages.len()).is_some() {
                        ctx.add_diagnostic(
                            Diagnostic::warning(
                                PHASE,
                                format!("message `{}` declared more than once", m.name),
                            )
                            .at(&m.name),
                        );
                    }
                    messages.push(lower_message(m, &mut maps, ctx));
                }
                Element::Other(other) => {
                    ctx.add_info(PHASE, format!("top-level {} skipped", describe(other)));
                }
                Element::Syntax(_) | Element::Import(_) | Element::Option(_) => {}
            }
        }

        let package = package
            .filter(|p| !p.is_empty())
            .ok_or(BuildError::MissingPackage)?;

        tracing::debug!(
            package,
            messages = messages.len(),
            maps = maps.len(),
            "lowered schema"
        );

        ctx.ir = Some(File {
            package: package.to_string(),
            messages,
            maps: maps.into_values().collect(),
        });
        Ok(())
    }
}

fn lower_message(
    message: &ast::Message,
    maps: &mut BTreeMap<String, MapType>,
    ctx: &mut CompilationContext<'_>,
) -> Message {
    let mut lowered = Message::new(&message.name).with_comment(comment_text(&message.comment));

    for element in &message.elements {
        match element {
            MessageElement::Field(field) => {
                lowered.fields.push(
                    Field::new(&field.name, FieldType::scalar(&field.ty))
                        .with_comment(comment_text(&field.comment))
                        .repeated(field.is_repeated()),
                );
            }
            MessageElement::Map(field) => {
                let type_name = MapType::canonical_name(&field.key_type, &field.value_type);
                let map = maps
                    .entry(type_name)
                    .or_insert_with(|| MapType::new(&field.key_type, &field.value_type));
                lowered.fields.push(
                    Field::new(
                        &field.name,
                        FieldType::Map {
                            type_name: map.type_name.clone(),
                        },
                    )
                    .with_comment(comment_text(&field.comment)),
                );
            }
            // Options and reserved ranges do not change the accessors.
            MessageElement::Other(other)
                if matches!(other.kind.as_str(), "option" | "reserved") => {}
            MessageElement::Other(other) => {
                let message = match other.kind.as_str() {
                    "oneof" => format!(
                        "{} is not supported; its fields get no accessors",
                        describe(other)
                    ),
                    _ => format!("nested {} skipped", describe(other)),
                };
                ctx.add_diagnostic(Diagnostic::warning(PHASE, message).at(&lowered.name));
            }
        }
    }

    lowered
}

/// Comment text with surrounding whitespace removed; empty comments are dropped.
fn comment_text(comment: &Option<ast::Comment>) -> Option<String> {
    comment
        .as_ref()
        .map(|c| c.message().trim().to_string())
        .filter(|c| !c.is_empty())
}

fn describe(other: &ast::Other) -> String {
    match &other.name {
        Some(name) => format!("{} `{}`", other.kind, name),
        None => other.kind.clone(),
    }
}
