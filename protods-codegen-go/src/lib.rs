//! Go code generator for protods.
//!
//! Emits, for each built schema, Go interface types over the message structs
//! produced by the Go protobuf bindings, named map containers satisfying
//! those interfaces, and setter methods for every field.

mod generator;
mod gofmt;
mod itypes;
mod type_mapper;

pub mod ast;

pub use generator::ItypesGenerator;
pub use gofmt::GoFmt;
pub use type_mapper::GoTypeMapper;
