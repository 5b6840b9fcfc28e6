//! Type mapping for Prisma Client declarations.

use sqlproc_codegen::TypeMapper;
use sqlproc_core::ParamType;

/// Maps declared parameter types to the types Prisma's raw queries accept.
pub struct PrismaTypeMapper;

impl TypeMapper for PrismaTypeMapper {
    fn map_param_type(&self, ty: ParamType) -> &'static str {
        match ty {
            ParamType::Int => "number",
            ParamType::BigInt => "number | bigint",
            ParamType::Float => "number",
            ParamType::Boolean => "boolean",
            ParamType::String => "string",
            ParamType::DateTime => "Date",
            ParamType::Decimal => "number | runtime.Decimal",
            ParamType::Json => "runtime.InputJsonObject",
            ParamType::Bytes => "Uint8Array",
        }
    }

    fn unknown_type(&self) -> &'static str {
        "unknown"
    }
}
