//! The executable half of a GraphQL document: operations, fragments and
//! their selection sets. These trees are assumed to be validated against the
//! schema before they reach the compiler; they carry no source positions.

use super::common::{Alias, Name, OperationType, Type, TypeName};

/// A GraphQL operation, such as `query($content:String!) { posts(content: $content) { id } }`.
///
/// [Reference](https://spec.graphql.org/June2018/#OperationDefinition).
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    /// The type of operation.
    pub ty: OperationType,
    /// The name of the operation.
    pub name: Option<Name>,
    /// The variable definitions.
    pub variable_definitions: Vec<VariableDefinition>,
    /// The operation's selection set.
    pub selection_set: SelectionSet,
}

/// A variable definition inside a list of variable definitions, for example `$name:String!`.
///
/// [Reference](https://spec.graphql.org/June2018/#VariableDefinition).
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    /// The name of the variable, without the preceding `$`.
    pub name: Name,
    /// The type of the variable.
    pub var_type: Type,
}

/// A set of fields to be selected, for example `{ name age }`.
///
/// [Reference](https://spec.graphql.org/June2018/#SelectionSet).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionSet {
    /// The fields to be selected.
    pub items: Vec<Selection>,
}

impl SelectionSet {
    pub fn new(items: Vec<Selection>) -> SelectionSet {
        SelectionSet { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A part of an object to be selected; a single field, a fragment spread or an inline fragment.
///
/// [Reference](https://spec.graphql.org/June2018/#Selection).
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Select a single field, such as `name` or `nick: name`.
    Field(Field),
    /// Select using a fragment.
    FragmentSpread(FragmentSpread),
    /// Select using an inline fragment.
    InlineFragment(InlineFragment),
}

/// A field being selected on an object, such as `name` or `nick: name`.
///
/// [Reference](https://spec.graphql.org/June2018/#Field).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The optional field alias.
    pub alias: Option<Alias>,
    /// The name of the field.
    pub name: Name,
    /// The subfields being selected in this field, if it is an object. `None` if no fields are
    /// being selected.
    pub selection_set: Option<SelectionSet>,
}

/// A fragment selector, such as `... userFields`.
///
/// [Reference](https://spec.graphql.org/June2018/#FragmentSpread).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    /// The name of the fragment being selected.
    pub fragment_name: Name,
}

/// An inline fragment selector, such as `... on User { name }`.
///
/// [Reference](https://spec.graphql.org/June2018/#InlineFragment).
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    /// The type condition.
    pub type_condition: Option<TypeCondition>,
    /// The selected fields of the fragment.
    pub selection_set: SelectionSet,
}

/// The definition of a fragment, such as `fragment userFields on User { name age }`.
///
/// [Reference](https://spec.graphql.org/June2018/#FragmentDefinition).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    /// Name of the fragment.
    pub name: Name,
    /// The type this fragment operates on.
    pub type_condition: TypeCondition,
    /// The fragment's selection set.
    pub selection_set: SelectionSet,
}

/// A type a fragment can apply to (`on` followed by the type).
///
/// [Reference](https://spec.graphql.org/June2018/#TypeCondition).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCondition {
    /// The type this fragment applies to.
    pub on: TypeName,
}
