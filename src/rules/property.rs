//! Property rule
//!
//! Declares one field for a property schema and applies the annotation rule
//! when the property asks for marker types.

use serde_json::Value;

use super::{Rule, RuleContext, ANNOTATION_KEYWORD};
use crate::error::{Result, TypegenError};
use crate::model::{ClassId, FieldId, PackageId};
use crate::names::to_camel_case;
use crate::schema::{SchemaContext, SchemaNode};

/// Where a property lands
#[derive(Debug, Clone, Copy)]
pub struct PropertyTarget {
    pub class: ClassId,
    /// Package for any classes the property type needs
    pub package: PackageId,
    /// Listed in the parent's `required`
    pub required: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyRule;

impl Rule<PropertyTarget, FieldId> for PropertyRule {
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        target: PropertyTarget,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<FieldId> {
        let field_name = to_camel_case(node_name);
        if field_name.is_empty() {
            return Err(TypegenError::malformed(
                schema.locator(),
                node_name,
                "cannot derive a field name",
            ));
        }

        let factory = cx.factory();
        let ty = factory
            .type_rule()
            .apply(node_name, node, target.package, schema, cx)?;

        let field = cx
            .model
            .declare_field(target.class, &field_name, node_name, ty, target.required);

        let Some(annotations) = node.get(ANNOTATION_KEYWORD) else {
            return Ok(field);
        };
        let annotation_rule = factory.annotation_rule();
        match annotations.value() {
            Value::Array(names) => {
                for name in names {
                    annotation_rule.apply(node_name, SchemaNode::new(name), field, schema, cx)?;
                }
                Ok(field)
            }
            Value::String(_) => annotation_rule.apply(node_name, annotations, field, schema, cx),
            _ => Err(TypegenError::malformed(
                schema.locator(),
                node_name,
                format!("'{ANNOTATION_KEYWORD}' must be a string or an array of strings"),
            )),
        }
    }
}
