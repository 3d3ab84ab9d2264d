//! Flattening resolves fragment spreads and inline fragments into inlined
//! field lists, while retaining a record of which fragments contributed.
//! The result is the input the import extractor works from: leaf types
//! referenced at any nesting depth become visible in one flat pass.

use serde::Serialize;
use std::collections::HashMap;

use crate::ast::common as ast;
use crate::ast::executable;
use crate::error::{Error, Result};
use crate::schema;

/// The fragment definitions in scope for the document being flattened,
/// keyed by fragment name.
pub type Fragments<'q> = HashMap<&'q ast::Name, &'q executable::FragmentDefinition>;

/// A selection set with all fragment inclusion resolved away.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlattenedOperation {
    pub inner_models: Vec<InnerModel>,
}

/// One flattening branch: the resolved fields selected at a single level of
/// the selection tree, together with the names of the fragments that were
/// inlined into it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InnerModel {
    /// The schema type this branch selects on.
    pub on_type: ast::TypeName,
    /// The resolved fields of this branch, in selection order.
    pub fields: Vec<FlatField>,
    /// The distinct fragment names spread into this branch, in spread order.
    pub fragments_spread: Vec<ast::Name>,
}

impl InnerModel {
    fn new(on_type: ast::TypeName) -> InnerModel {
        InnerModel {
            on_type,
            fields: Vec::new(),
            fragments_spread: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.fragments_spread.is_empty()
    }
}

/// A field selection resolved against the schema: the alias and name it was
/// selected under, and the base type of the field with all list/non-null
/// modifiers stripped.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlatField {
    pub alias: Option<ast::Alias>,
    pub name: ast::Name,
    pub type_name: ast::TypeName,
}

/// Flattens an operation's selection set, rooted at the schema's root type
/// for the operation's kind.
pub fn flatten_operation(
    schema: &schema::Schema,
    fragments: &Fragments<'_>,
    operation: &executable::OperationDefinition,
) -> Result<FlattenedOperation> {
    let root_type = schema
        .operation_root_type(operation.ty)
        .ok_or(Error::NoOperationRootType {
            operation_type: operation.ty,
        })?;
    flatten_selection_set(schema, fragments, root_type, &operation.selection_set)
}

/// Flattens a fragment definition's selection set, rooted at its type
/// condition.
pub fn flatten_fragment(
    schema: &schema::Schema,
    fragments: &Fragments<'_>,
    fragment: &executable::FragmentDefinition,
) -> Result<FlattenedOperation> {
    flatten_selection_set(
        schema,
        fragments,
        &fragment.type_condition.on,
        &fragment.selection_set,
    )
}

/// Flattens a selection set against `root_type`.
///
/// Fragment spreads inline their fields into the branch they were spread
/// into, recording the fragment name on it. Inline fragments and nested
/// field selections each open a fresh branch (on the condition type and the
/// field's base type respectively), visited depth-first. Branches that end
/// up with no fields and no spreads are dropped.
pub fn flatten_selection_set(
    schema: &schema::Schema,
    fragments: &Fragments<'_>,
    root_type: &ast::TypeName,
    selection_set: &executable::SelectionSet,
) -> Result<FlattenedOperation> {
    let mut models = vec![InnerModel::new(root_type.clone())];
    flatten_into(schema, fragments, root_type, selection_set, 0, &mut models)?;
    models.retain(|model| !model.is_empty());
    Ok(FlattenedOperation {
        inner_models: models,
    })
}

fn flatten_into(
    schema: &schema::Schema,
    fragments: &Fragments<'_>,
    parent_type: &ast::TypeName,
    selection_set: &executable::SelectionSet,
    model_index: usize,
    models: &mut Vec<InnerModel>,
) -> Result<()> {
    for selection in &selection_set.items {
        match selection {
            executable::Selection::Field(field) => {
                let field_definition = lookup_field(schema, parent_type, &field.name)?;
                let base_type = field_definition.field_type.underlying_type().clone();
                models[model_index].fields.push(FlatField {
                    alias: field.alias.clone(),
                    name: field.name.clone(),
                    type_name: base_type.clone(),
                });
                if let Some(nested) = &field.selection_set {
                    if !nested.is_empty() {
                        let nested_index = models.len();
                        models.push(InnerModel::new(base_type.clone()));
                        flatten_into(schema, fragments, &base_type, nested, nested_index, models)?;
                    }
                }
            }
            executable::Selection::FragmentSpread(spread) => {
                let fragment = fragments
                    .get(&spread.fragment_name)
                    .ok_or_else(|| Error::UnknownFragment(spread.fragment_name.clone()))?;
                let model = &mut models[model_index];
                if !model.fragments_spread.contains(&spread.fragment_name) {
                    model.fragments_spread.push(spread.fragment_name.clone());
                }
                // the fragment's fields resolve against its own type
                // condition, but they land in the branch it was spread into
                flatten_into(
                    schema,
                    fragments,
                    &fragment.type_condition.on,
                    &fragment.selection_set,
                    model_index,
                    models,
                )?;
            }
            executable::Selection::InlineFragment(inline) => match &inline.type_condition {
                Some(type_condition) => {
                    let condition_index = models.len();
                    models.push(InnerModel::new(type_condition.on.clone()));
                    flatten_into(
                        schema,
                        fragments,
                        &type_condition.on,
                        &inline.selection_set,
                        condition_index,
                        models,
                    )?;
                }
                None => {
                    flatten_into(
                        schema,
                        fragments,
                        parent_type,
                        &inline.selection_set,
                        model_index,
                        models,
                    )?;
                }
            },
        }
    }
    Ok(())
}

fn lookup_field<'s>(
    schema: &'s schema::Schema,
    parent_type: &ast::TypeName,
    field_name: &ast::Name,
) -> Result<&'s schema::Field> {
    let type_info = schema
        .get_type(parent_type)
        .ok_or_else(|| Error::UnknownType(parent_type.clone()))?;
    let fields = type_info
        .fields()
        .ok_or_else(|| Error::SelectionOnLeafType {
            type_name: parent_type.clone(),
        })?;
    fields.get(field_name).ok_or_else(|| Error::NoFieldOnType {
        type_name: parent_type.clone(),
        field_name: field_name.clone(),
    })
}
