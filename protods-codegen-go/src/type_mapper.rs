//! Go type mapper implementation.

use protods_codegen::language::TypeMapper;

/// Maps proto scalar types to Go types.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> &'static str {
        "go"
    }

    fn map_scalar<'a>(&self, proto_type: &'a str) -> &'a str {
        match proto_type {
            "double" => "float64",
            "float" => "float32",
            "int32" | "sint32" | "sfixed32" => "int32",
            "int64" | "sint64" | "sfixed64" => "int64",
            "uint32" | "fixed32" => "uint32",
            "uint64" | "fixed64" => "uint64",
            "bytes" => "[]byte",
            // bool, string, enums and unknown names are spelled the same
            other => other,
        }
    }

    fn map_reference(&self, message: &str) -> String {
        format!("*{message}")
    }

    fn map_repeated(&self, element: &str) -> String {
        format!("[]{element}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_mapping() {
        let mapper = GoTypeMapper;
        let cases = [
            ("double", "float64"),
            ("float", "float32"),
            ("int32", "int32"),
            ("sint32", "int32"),
            ("sfixed32", "int32"),
            ("int64", "int64"),
            ("sint64", "int64"),
            ("sfixed64", "int64"),
            ("uint32", "uint32"),
            ("fixed32", "uint32"),
            ("uint64", "uint64"),
            ("fixed64", "uint64"),
            ("bool", "bool"),
            ("string", "string"),
            ("bytes", "[]byte"),
        ];
        for (proto, go) in cases {
            assert_eq!(mapper.map_scalar(proto), go, "{proto}");
        }
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(GoTypeMapper.map_scalar("Status"), "Status");
        assert_eq!(GoTypeMapper.language(), "go");
    }

    #[test]
    fn test_composite_types() {
        assert_eq!(GoTypeMapper.map_reference("Example"), "*Example");
        assert_eq!(GoTypeMapper.map_repeated("*Example"), "[]*Example");
        assert_eq!(GoTypeMapper.map_repeated("string"), "[]string");
    }
}
