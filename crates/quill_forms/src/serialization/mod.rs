pub mod json;
pub mod host_codegen;
