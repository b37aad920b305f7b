//! Human-readable dump of a built model.

use protods_ir::{Field, FieldType, File};

use super::output::{Output, Report};

pub struct InspectReport<'a> {
    file: &'a File,
}

impl<'a> InspectReport<'a> {
    pub fn new(file: &'a File) -> Self {
        Self { file }
    }
}

fn field_type(field: &Field) -> String {
    let ty = match &field.ty {
        FieldType::Scalar { name } => name.as_str(),
        FieldType::Message { target } => target.inter_name.as_str(),
        FieldType::Map { type_name } => type_name.as_str(),
    };
    if field.repeated {
        format!("repeated {ty}")
    } else {
        ty.to_string()
    }
}

impl Report for InspectReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.file.package);

        if !self.file.maps.is_empty() {
            out.newline();
            out.section("Map types");
            for map in &self.file.maps {
                out.list_item(&format!(
                    "{} = map<{}, {}>",
                    map.type_name,
                    map.key,
                    map.value_type_name()
                ));
            }
        }

        if !self.file.messages.is_empty() {
            out.newline();
            out.section("Messages");
            for message in &self.file.messages {
                out.list_item(&message.name);
                for field in &message.fields {
                    out.preformatted(&format!("      {}: {}", field.name, field_type(field)));
                }
            }
        }
    }
}
