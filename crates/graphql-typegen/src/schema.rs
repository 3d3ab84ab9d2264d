//! The schema type graph the compiler runs against. The graph is assumed to
//! be fully resolved before compilation begins: every type referenced by a
//! field, argument or union member is present in [`Schema::types`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ast::common as ast;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Schema {
    pub types: BTreeMap<ast::TypeName, TypeInfo>,
    pub query_type: ast::TypeName,
    pub mutation_type: Option<ast::TypeName>,
    pub subscription_type: Option<ast::TypeName>,
}

impl Schema {
    pub fn get_type(&self, type_name: &ast::TypeName) -> Option<&TypeInfo> {
        self.types.get(type_name)
    }

    /// The root type for the given operation type, if the schema defines one.
    pub fn operation_root_type(&self, ty: ast::OperationType) -> Option<&ast::TypeName> {
        match ty {
            ast::OperationType::Query => Some(&self.query_type),
            ast::OperationType::Mutation => self.mutation_type.as_ref(),
            ast::OperationType::Subscription => self.subscription_type.as_ref(),
        }
    }
}

/// The definition of a type in the schema, one variant per type category.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub enum TypeInfo {
    Scalar(Scalar),
    Enum(Enum),
    Object(Object),
    Interface(Interface),
    Union(Union),
    InputObject(InputObject),
}

impl TypeInfo {
    pub fn name(&self) -> &ast::TypeName {
        match self {
            TypeInfo::Scalar(scalar) => &scalar.name,
            TypeInfo::Enum(enum_info) => &enum_info.name,
            TypeInfo::Object(object) => &object.name,
            TypeInfo::Interface(interface) => &interface.name,
            TypeInfo::Union(union) => &union.name,
            TypeInfo::InputObject(input_object) => &input_object.name,
        }
    }

    /// The field map of this type, if fields can be selected on it.
    pub fn fields(&self) -> Option<&IndexMap<ast::Name, Field>> {
        match self {
            TypeInfo::Object(object) => Some(&object.fields),
            TypeInfo::Interface(interface) => Some(&interface.fields),
            TypeInfo::Scalar(_)
            | TypeInfo::Enum(_)
            | TypeInfo::Union(_)
            | TypeInfo::InputObject(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Scalar {
    pub name: ast::TypeName,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Enum {
    pub name: ast::TypeName,
    pub description: Option<String>,
    /// The possible values of the enum.
    pub values: Vec<ast::Name>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Object {
    pub name: ast::TypeName,
    pub description: Option<String>,
    /// The fields of the object, in declaration order.
    pub fields: IndexMap<ast::Name, Field>,
    /// The interfaces that this object type implements.
    pub interfaces: Vec<ast::TypeName>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Interface {
    pub name: ast::TypeName,
    pub description: Option<String>,
    /// The fields of the interface, in declaration order.
    pub fields: IndexMap<ast::Name, Field>,
    /// The interfaces that this interface itself implements.
    pub interfaces: Vec<ast::TypeName>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Union {
    pub name: ast::TypeName,
    pub description: Option<String>,
    /// The possible concrete member types, in declaration order.
    pub members: Vec<ast::TypeName>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct InputObject {
    pub name: ast::TypeName,
    pub description: Option<String>,
    /// The fields of the input object, in declaration order.
    pub fields: IndexMap<ast::Name, InputField>,
}

/// The definition of a field inside an object or interface.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Field {
    pub name: ast::Name,
    pub description: Option<String>,
    pub field_type: ast::Type,
    /// The arguments of the field, in declaration order.
    pub arguments: IndexMap<ast::Name, InputField>,
}

impl Field {
    pub fn new(name: ast::Name, field_type: ast::Type) -> Field {
        Field {
            name,
            description: None,
            field_type,
            arguments: IndexMap::new(),
        }
    }

    pub fn with_arguments(
        name: ast::Name,
        field_type: ast::Type,
        arguments: IndexMap<ast::Name, InputField>,
    ) -> Field {
        Field {
            name,
            description: None,
            field_type,
            arguments,
        }
    }
}

/// The definition of an input value: a field argument or an input object
/// field.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct InputField {
    pub name: ast::Name,
    pub description: Option<String>,
    pub field_type: ast::Type,
}

impl InputField {
    pub fn new(name: ast::Name, field_type: ast::Type) -> InputField {
        InputField {
            name,
            description: None,
            field_type,
        }
    }
}
