//! Resolve phase - resolves message references and orders the IR.

use eyre::Result;
use indexmap::{IndexMap, IndexSet};
use protods_ir::{Field, FieldType, MapType, TypeRef};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

const PHASE: &str = "resolve";

/// Phase that resolves type names against the declared messages.
///
/// - A map whose value type names a declared message becomes a reference map.
/// - A singular field whose type names a declared message becomes a message
///   field. Repeated fields keep their declared type.
/// - Names qualified with the file's own package (`demo.Example`,
///   `.demo.Example`) resolve like the bare name. Maps that differ only in
///   that spelling are merged.
/// - A field whose type is qualified but not declared in this file gets no
///   accessors and a warning; the generated code cannot name it.
/// - Messages are sorted by name and maps by canonical name, so output does
///   not depend on declaration order.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Resolve message references and order the IR"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let mut file = ctx.take_ir()?;
        let mut scope = Scope {
            package: file.package.clone(),
            declared: file.messages.iter().map(|m| m.name.clone()).collect(),
            renamed: IndexMap::new(),
            foreign: IndexMap::new(),
        };

        let mut maps: IndexMap<String, MapType> = IndexMap::new();
        for map in std::mem::take(&mut file.maps) {
            let value = scope.local(&map.value);
            let resolved = if scope.declared.contains(value) {
                tracing::trace!(map = %map.type_name, value, "resolved reference map");
                let mut resolved = MapType::new(map.key.as_str(), value);
                resolved.resolve(TypeRef::new(value));
                if resolved.type_name != map.type_name {
                    scope
                        .renamed
                        .insert(map.type_name.clone(), resolved.type_name.clone());
                }
                resolved
            } else if is_qualified(value) {
                scope.foreign.insert(map.type_name.clone(), map.value.clone());
                continue;
            } else {
                map
            };
            maps.entry(resolved.type_name.clone()).or_insert(resolved);
        }

        for message in &mut file.messages {
            let mut kept = Vec::with_capacity(message.fields.len());
            for mut field in std::mem::take(&mut message.fields) {
                match resolve_field(&mut field, &scope) {
                    Ok(()) => kept.push(field),
                    Err(ty) => ctx.add_diagnostic(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "field `{}` refers to `{ty}`, which is not declared in this file; \
                                 it gets no accessors",
                                field.name
                            ),
                        )
                        .at(&message.name),
                    ),
                }
            }
            message.fields = kept;
        }

        file.maps = maps.into_values().collect();
        file.messages.sort_by(|a, b| a.name.cmp(&b.name));
        file.maps.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        ctx.ir = Some(file);
        Ok(())
    }
}

/// Names visible to the resolver.
struct Scope {
    package: String,
    declared: IndexSet<String>,
    /// Map type names replaced by their unqualified spelling.
    renamed: IndexMap<String, String>,
    /// Map type names whose value type is declared elsewhere, with that type.
    foreign: IndexMap<String, String>,
}

impl Scope {
    /// Strip a leading dot and the file's own package from a type name.
    fn local<'t>(&self, ty: &'t str) -> &'t str {
        let ty = ty.strip_prefix('.').unwrap_or(ty);
        ty.strip_prefix(self.package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(ty)
    }
}

fn is_qualified(ty: &str) -> bool {
    ty.contains('.')
}

/// Resolve one field in place. Fails with the offending type name when the
/// field refers to a type from another package.
fn resolve_field(field: &mut Field, scope: &Scope) -> Result<(), String> {
    let resolved = match &field.ty {
        FieldType::Map { type_name } => {
            if let Some(value) = scope.foreign.get(type_name) {
                return Err(value.clone());
            }
            match scope.renamed.get(type_name) {
                Some(renamed) => FieldType::Map {
                    type_name: renamed.clone(),
                },
                None => return Ok(()),
            }
        }
        FieldType::Scalar { name } => {
            let local = scope.local(name);
            if !scope.declared.contains(local) {
                return if is_qualified(local) {
                    Err(name.clone())
                } else {
                    Ok(())
                };
            }
            if field.repeated {
                FieldType::scalar(local)
            } else {
                FieldType::Message {
                    target: TypeRef::new(local),
                }
            }
        }
        FieldType::Message { .. } => return Ok(()),
    };
    field.ty = resolved;
    Ok(())
}
