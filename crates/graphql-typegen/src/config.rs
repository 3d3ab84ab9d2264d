//! Caller-supplied compiler configuration. There is no ambient state: the
//! scalar set is threaded as an argument into every compiler call.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ast::common as ast;

/// The set of type names treated as leaves by the compiler.
///
/// This is not derived from the schema's own scalar category alone: callers
/// may declare any type name (custom scalars, mapped enums) as a leaf, in
/// which case selections never descend into it and it never contributes an
/// import.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct ScalarSet(HashSet<ast::TypeName>);

impl ScalarSet {
    pub fn new() -> ScalarSet {
        ScalarSet(HashSet::new())
    }

    /// The five built-in GraphQL scalars: `String`, `Int`, `Float`,
    /// `Boolean` and `ID`.
    pub fn graphql_default() -> ScalarSet {
        ["String", "Int", "Float", "Boolean", "ID"]
            .into_iter()
            .map(|name| {
                ast::TypeName(ast::Name::new(name).expect("built-in scalar names are valid"))
            })
            .collect()
    }

    pub fn insert(&mut self, type_name: ast::TypeName) {
        self.0.insert(type_name);
    }

    pub fn contains(&self, type_name: &ast::TypeName) -> bool {
        self.0.contains(type_name)
    }
}

impl FromIterator<ast::TypeName> for ScalarSet {
    fn from_iter<I: IntoIterator<Item = ast::TypeName>>(iter: I) -> ScalarSet {
        ScalarSet(iter.into_iter().collect())
    }
}

#[test]
fn test_default_scalars() {
    use crate::mk_name;

    let scalars = ScalarSet::graphql_default();
    assert!(scalars.contains(&ast::TypeName(mk_name!("ID"))));
    assert!(scalars.contains(&ast::TypeName(mk_name!("Boolean"))));
    assert!(!scalars.contains(&ast::TypeName(mk_name!("User"))));
}
