//! The shape compiler: turns a selection set over a schema type into a
//! structural descriptor of exactly the fields (and aliases) the selection
//! yields. Purely recursive over immutable inputs; termination is bounded by
//! the nesting depth of the input selection set.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

use crate::ast::common as ast;
use crate::ast::executable;
use crate::config::ScalarSet;
use crate::error::{Error, Result};
use crate::schema;

/// The structural shape of one compiled selection-set node, split into three
/// partitions: plain scalar fields, aliased scalar fields, and link fields
/// carrying a nested descriptor each.
///
/// The output keys of the three partitions are pairwise disjoint for any
/// schema-valid selection; aliasing is what lets one schema field surface
/// more than once under different keys.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    /// The type the selection was compiled against.
    pub type_name: ast::TypeName,
    /// Scalar fields selected under their own name.
    pub scalar_fields: Vec<ast::Name>,
    /// Scalar fields selected under an alias.
    pub aliased_fields: Vec<AliasedField>,
    /// Fields whose value is itself a composite type, compiled recursively.
    pub link_fields: Vec<LinkField>,
}

impl ShapeDescriptor {
    fn new(type_name: ast::TypeName) -> ShapeDescriptor {
        ShapeDescriptor {
            type_name,
            scalar_fields: Vec::new(),
            aliased_fields: Vec::new(),
            link_fields: Vec::new(),
        }
    }

    /// Whether all three partitions are empty. An empty descriptor renders
    /// as the empty string.
    pub fn is_empty(&self) -> bool {
        self.scalar_fields.is_empty()
            && self.aliased_fields.is_empty()
            && self.link_fields.is_empty()
    }
}

/// A scalar field selected under an alias. The original field name is what
/// alias lookups resolve through, so it is recorded alongside the alias
/// rather than the field's type.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AliasedField {
    pub alias: ast::Alias,
    pub field_name: ast::Name,
}

/// A link field: a selected field whose base type is composite, together
/// with the descriptor compiled from its nested selection set.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LinkField {
    pub alias: Option<ast::Alias>,
    pub name: ast::Name,
    /// The base type of the field, with list/non-null modifiers stripped.
    pub type_name: ast::TypeName,
    pub shape: ShapeDescriptor,
}

impl LinkField {
    /// The key this link appears under in the output: alias if present,
    /// field name otherwise.
    pub fn response_key(&self) -> &ast::Name {
        self.alias.as_ref().map_or(&self.name, |alias| &alias.0)
    }
}

/// Compiles `selection_set` against `parent_type` into a [`ShapeDescriptor`].
///
/// An empty or absent selection set compiles to the empty descriptor. A
/// field selection that does not exist on `parent_type` is a precondition
/// violation (inputs are validated upstream) and fails with
/// [`Error::NoFieldOnType`] rather than being skipped: silently omitting a
/// field would produce a structurally wrong but plausible-looking type.
pub fn compile(
    scalars: &ScalarSet,
    schema: &schema::Schema,
    parent_type: &ast::TypeName,
    selection_set: Option<&executable::SelectionSet>,
) -> Result<ShapeDescriptor> {
    let mut descriptor = ShapeDescriptor::new(parent_type.clone());
    let Some(selection_set) = selection_set else {
        return Ok(descriptor);
    };
    if selection_set.is_empty() {
        return Ok(descriptor);
    }

    // resolved on the first field selection; a set holding only fragment
    // branches (a union parent, say) never needs the parent's field map and
    // compiles to the empty descriptor
    let mut parent_fields = None;

    for selection in &selection_set.items {
        match selection {
            executable::Selection::Field(field) => {
                let fields = match parent_fields {
                    Some(fields) => fields,
                    None => {
                        let parent_info = schema
                            .get_type(parent_type)
                            .ok_or_else(|| Error::UnknownType(parent_type.clone()))?;
                        let fields =
                            parent_info
                                .fields()
                                .ok_or_else(|| Error::SelectionOnLeafType {
                                    type_name: parent_type.clone(),
                                })?;
                        parent_fields = Some(fields);
                        fields
                    }
                };
                let field_definition =
                    fields
                        .get(&field.name)
                        .ok_or_else(|| Error::NoFieldOnType {
                            type_name: parent_type.clone(),
                            field_name: field.name.clone(),
                        })?;
                let base_type = field_definition.field_type.underlying_type();

                if scalars.contains(base_type) {
                    match &field.alias {
                        Some(alias) => descriptor.aliased_fields.push(AliasedField {
                            alias: alias.clone(),
                            field_name: field.name.clone(),
                        }),
                        None => descriptor.scalar_fields.push(field.name.clone()),
                    }
                } else {
                    let nested =
                        compile(scalars, schema, base_type, field.selection_set.as_ref())?;
                    descriptor.link_fields.push(LinkField {
                        alias: field.alias.clone(),
                        name: field.name.clone(),
                        type_name: base_type.clone(),
                        shape: nested,
                    });
                }
            }
            // fragment branches are resolved by flattening before shape
            // compilation; the shape of a node only covers its direct fields
            executable::Selection::FragmentSpread(_)
            | executable::Selection::InlineFragment(_) => {}
        }
    }

    Ok(descriptor)
}

/// Renders the conjunction of the descriptor's non-empty partitions:
/// a projection of the plain scalar fields, an alias record resolving each
/// alias through its original field, and a record of the nested link shapes.
/// Empty partitions are omitted; the all-empty descriptor renders as the
/// empty string.
impl Display for ShapeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let mut parts: Vec<String> = Vec::with_capacity(3);

        if !self.scalar_fields.is_empty() {
            let picked = self
                .scalar_fields
                .iter()
                .map(|name| format!("{name}: *"))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("$Pick<{}, {{ {picked} }}>", self.type_name));
        }

        if !self.aliased_fields.is_empty() {
            let aliased = self
                .aliased_fields
                .iter()
                .map(|field| {
                    format!(
                        "{}: $ElementType<{}, '{}'>",
                        field.alias, self.type_name, field.field_name
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{{ {aliased} }}"));
        }

        if !self.link_fields.is_empty() {
            let links = self
                .link_fields
                .iter()
                .map(|link| format!("{}: {}", link.response_key(), link.shape))
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{{ {links} }}"));
        }

        write!(f, "({})", parts.join(" & "))
    }
}
