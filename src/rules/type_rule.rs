//! Dispatch on the `type` keyword

use tracing::debug;

use super::{Rule, RuleContext};
use crate::error::{Result, TypegenError};
use crate::model::{PackageId, TypeRef};
use crate::schema::{SchemaContext, SchemaNode, SchemaType};

/// Resolves a node's type through the rule registered for its declared
/// `type`.
///
/// Fails with `UnresolvableElementType` when the keyword is unknown or no
/// rule is registered for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeRule;

impl Rule<PackageId, TypeRef> for TypeRule {
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        package: PackageId,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let type_name = node.type_name();
        let unresolvable = || TypegenError::UnresolvableElementType {
            locator: schema.locator().to_string(),
            node: node_name.to_string(),
            type_name: type_name.to_string(),
        };

        let tag = SchemaType::from_keyword(type_name).ok_or_else(unresolvable)?;
        let rule = cx.factory().rule_for(tag).ok_or_else(unresolvable)?;

        debug!(node = node_name, %tag, "dispatching type rule");
        rule.apply(node_name, node, package, schema, cx)
    }
}
