use crate::ast::common as ast;

/// Failures shared by the shape compiler and the import extractor.
///
/// All of these indicate a selection tree that is inconsistent with the
/// schema, which is a precondition violation (inputs are assumed validated
/// upstream). They fail the single `compile`/`extract_imports` call that hit
/// them; no state survives a failure.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("no field '{field_name}' on type {type_name}")]
    NoFieldOnType {
        type_name: ast::TypeName,
        field_name: ast::Name,
    },

    #[error("unknown type {0}")]
    UnknownType(ast::TypeName),

    #[error("unknown fragment {0}")]
    UnknownFragment(ast::Name),

    #[error("fields cannot be selected on leaf type {type_name}")]
    SelectionOnLeafType { type_name: ast::TypeName },

    #[error("the schema defines no root type for {operation_type} operations")]
    NoOperationRootType {
        operation_type: ast::OperationType,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
