//! The import extractor: computes, per generated type context, the
//! deduplicated and first-seen-ordered list of externally defined artifacts
//! it references, each paired with a synthetic file designator.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::common as ast;
use crate::ast::executable;
use crate::config::ScalarSet;
use crate::error::{Error, Result};
use crate::filename::sanitize_filename;
use crate::flatten::{self, FlattenedOperation, Fragments};
use crate::schema;

/// The classification of a referenced artifact, which determines the tag of
/// its file designator.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Type,
    Interface,
    Enum,
    InputType,
    Scalar,
    Fragment,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::Type => "type",
            ImportKind::Interface => "interface",
            ImportKind::Enum => "enum",
            ImportKind::InputType => "input-type",
            ImportKind::Scalar => "scalar",
            ImportKind::Fragment => "fragment",
        }
    }
}

/// An external dependency of a generated artifact: the referenced name and
/// the file designator it can be included from.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub name: ast::Name,
    pub file: String,
}

/// The context whose imports are being extracted.
pub enum ImportContext<'q> {
    /// An object, interface, input-object, union, scalar or enum type
    /// definition: its own fields, their arguments, implemented interfaces
    /// and union members.
    TypeDefinition(&'q schema::TypeInfo),
    /// An operation: its variables, then its flattened selection set.
    Operation {
        operation: &'q executable::OperationDefinition,
        fragments: &'q Fragments<'q>,
    },
    /// A fragment definition: its flattened selection set.
    Fragment {
        fragment: &'q executable::FragmentDefinition,
        fragments: &'q Fragments<'q>,
    },
    /// A selection set that has already been flattened.
    Flattened(&'q FlattenedOperation),
}

/// Extracts the import list of `context`: deduplicated by referenced name,
/// first occurrence winning position. A context with no non-scalar
/// references yields an empty list.
pub fn extract_imports(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    context: &ImportContext<'_>,
) -> Result<Vec<ImportRecord>> {
    let mut accumulator = ImportAccumulator::default();
    match context {
        ImportContext::TypeDefinition(type_info) => {
            add_type_definition(scalars, schema, type_info, &mut accumulator)?;
        }
        ImportContext::Operation {
            operation,
            fragments,
        } => {
            add_variables(scalars, schema, &operation.variable_definitions, &mut accumulator)?;
            let flattened = flatten::flatten_operation(schema, fragments, operation)?;
            add_flattened(scalars, schema, &flattened, &mut accumulator)?;
        }
        ImportContext::Fragment {
            fragment,
            fragments,
        } => {
            let flattened = flatten::flatten_fragment(schema, fragments, fragment)?;
            add_flattened(scalars, schema, &flattened, &mut accumulator)?;
        }
        ImportContext::Flattened(flattened) => {
            add_flattened(scalars, schema, flattened, &mut accumulator)?;
        }
    }
    Ok(accumulator.into_records())
}

/// Order-preserving, name-keyed accumulator: the first record added for a
/// name wins its position, later additions for the same name are no-ops.
#[derive(Default)]
struct ImportAccumulator {
    records: IndexMap<ast::Name, ImportRecord>,
}

impl ImportAccumulator {
    fn add(&mut self, name: &ast::Name, kind: ImportKind) {
        if !self.records.contains_key(name) {
            let file = sanitize_filename(name.as_str(), kind.as_str());
            self.records.insert(
                name.clone(),
                ImportRecord {
                    name: name.clone(),
                    file,
                },
            );
        }
    }

    fn into_records(self) -> Vec<ImportRecord> {
        self.records.into_values().collect()
    }
}

/// Classifies a referenced type through the schema. Anything that is not an
/// enum, input object, scalar or interface falls back to the plain "type"
/// designator.
fn classify(schema: &schema::Schema, type_name: &ast::TypeName) -> Result<ImportKind> {
    let type_info = schema
        .get_type(type_name)
        .ok_or_else(|| Error::UnknownType(type_name.clone()))?;
    Ok(match type_info {
        schema::TypeInfo::Enum(_) => ImportKind::Enum,
        schema::TypeInfo::InputObject(_) => ImportKind::InputType,
        schema::TypeInfo::Scalar(_) => ImportKind::Scalar,
        schema::TypeInfo::Interface(_) => ImportKind::Interface,
        schema::TypeInfo::Object(_) | schema::TypeInfo::Union(_) => ImportKind::Type,
    })
}

fn add_type_definition(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    type_info: &schema::TypeInfo,
    accumulator: &mut ImportAccumulator,
) -> Result<()> {
    let own_name = type_info.name();
    match type_info {
        schema::TypeInfo::Object(object) => {
            add_own_fields(scalars, schema, own_name, &object.fields, accumulator)?;
            for interface in &object.interfaces {
                accumulator.add(&interface.0, ImportKind::Interface);
            }
        }
        schema::TypeInfo::Interface(interface) => {
            add_own_fields(scalars, schema, own_name, &interface.fields, accumulator)?;
            for implemented in &interface.interfaces {
                accumulator.add(&implemented.0, ImportKind::Interface);
            }
        }
        schema::TypeInfo::InputObject(input_object) => {
            for input_field in input_object.fields.values() {
                add_type_reference(
                    scalars,
                    schema,
                    own_name,
                    &input_field.field_type,
                    accumulator,
                )?;
            }
        }
        schema::TypeInfo::Union(union) => {
            for member in &union.members {
                accumulator.add(&member.0, ImportKind::Type);
            }
        }
        // scalar and enum definitions reference nothing
        schema::TypeInfo::Scalar(_) | schema::TypeInfo::Enum(_) => {}
    }
    Ok(())
}

fn add_own_fields(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    own_name: &ast::TypeName,
    fields: &IndexMap<ast::Name, schema::Field>,
    accumulator: &mut ImportAccumulator,
) -> Result<()> {
    for field in fields.values() {
        add_type_reference(scalars, schema, own_name, &field.field_type, accumulator)?;
        // field arguments contribute independently of the field itself
        for argument in field.arguments.values() {
            add_type_reference(scalars, schema, own_name, &argument.field_type, accumulator)?;
        }
    }
    Ok(())
}

fn add_type_reference(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    own_name: &ast::TypeName,
    type_reference: &ast::Type,
    accumulator: &mut ImportAccumulator,
) -> Result<()> {
    let base_type = type_reference.underlying_type();
    // a type never imports itself
    if scalars.contains(base_type) || base_type == own_name {
        return Ok(());
    }
    let kind = classify(schema, base_type)?;
    accumulator.add(&base_type.0, kind);
    Ok(())
}

fn add_variables(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    variables: &[executable::VariableDefinition],
    accumulator: &mut ImportAccumulator,
) -> Result<()> {
    for variable in variables {
        let base_type = variable.var_type.underlying_type();
        if scalars.contains(base_type) {
            continue;
        }
        let kind = classify(schema, base_type)?;
        accumulator.add(&base_type.0, kind);
    }
    Ok(())
}

fn add_flattened(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    flattened: &FlattenedOperation,
    accumulator: &mut ImportAccumulator,
) -> Result<()> {
    for model in &flattened.inner_models {
        for fragment_name in &model.fragments_spread {
            accumulator.add(fragment_name, ImportKind::Fragment);
        }
        for field in &model.fields {
            if scalars.contains(&field.type_name) {
                continue;
            }
            let type_info = schema
                .get_type(&field.type_name)
                .ok_or_else(|| Error::UnknownType(field.type_name.clone()))?;
            match type_info {
                schema::TypeInfo::Enum(_) => {
                    accumulator.add(&field.type_name.0, ImportKind::Enum);
                }
                schema::TypeInfo::InputObject(_) => {
                    accumulator.add(&field.type_name.0, ImportKind::InputType);
                }
                schema::TypeInfo::Scalar(_) => {
                    accumulator.add(&field.type_name.0, ImportKind::Scalar);
                }
                // object, interface and union links contribute no direct
                // import here: their dependencies were already captured by
                // the recursive shape compilation of that branch
                schema::TypeInfo::Object(_)
                | schema::TypeInfo::Interface(_)
                | schema::TypeInfo::Union(_) => {}
            }
        }
    }
    Ok(())
}
