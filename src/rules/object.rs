//! Object rule
//!
//! Declares a class for an object schema and fills it through the property
//! rule, one field per entry of `properties`.

use tracing::debug;

use super::{PropertyTarget, Rule, RuleContext};
use crate::error::{Result, TypegenError};
use crate::model::{ClassId, PackageId, TypeRef};
use crate::names::to_pascal_case;
use crate::schema::{SchemaContext, SchemaNode};

#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectRule;

impl ObjectRule {
    /// Declare and populate the class, returning its id
    pub fn declare(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        package: PackageId,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<ClassId> {
        if !node.is_object() {
            return Err(TypegenError::malformed(
                schema.locator(),
                node_name,
                "object schema must be a JSON object",
            ));
        }

        let class_name = to_pascal_case(node.title().unwrap_or(node_name));
        if class_name.is_empty() {
            return Err(TypegenError::malformed(
                schema.locator(),
                node_name,
                "cannot derive a class name",
            ));
        }
        let class = cx.model.declare_class(package, &class_name);
        debug!(class = %cx.model.qualified_name(class), "declared class");

        let property_rule = cx.factory().property_rule();
        for (property_name, property) in node.properties() {
            let target = PropertyTarget {
                class,
                package,
                required: node.requires(property_name),
            };
            property_rule.apply(property_name, property, target, schema, cx)?;
        }

        Ok(class)
    }
}

impl Rule<PackageId, TypeRef> for ObjectRule {
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        package: PackageId,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let class = self.declare(node_name, node, package, schema, cx)?;
        Ok(cx.model.class_ref(class))
    }
}
