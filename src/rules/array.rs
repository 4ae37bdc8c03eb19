//! Collection-Type Rule
//!
//! Turns an array schema into a parameterized container reference:
//! - `uniqueItems: true` selects the unique collection slot, anything else the
//!   ordered slot
//! - the element type comes from whichever rule handles the `items` node
//! - decimal elements follow `use_double_numbers`
//! - elements are unboxed only when `use_primitives` is set *and* the selected
//!   container can hold primitives

use tracing::debug;

use super::{Rule, RuleContext};
use crate::config::{ContainerSpec, GenerationConfig};
use crate::error::{Result, TypegenError};
use crate::model::{CollectionKind, PackageId, ScalarKind, ScalarType, TypeRef};
use crate::names::singular;
use crate::schema::{SchemaContext, SchemaNode};

#[derive(Debug, Default, Clone, Copy)]
pub struct ArrayRule;

impl Rule<PackageId, TypeRef> for ArrayRule {
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        package: PackageId,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let items = node.items().ok_or_else(|| {
            TypegenError::malformed(schema.locator(), node_name, "array schema has no 'items'")
        })?;
        if !items.is_object() {
            return Err(TypegenError::malformed(
                schema.locator(),
                node_name,
                "'items' must be a single schema object",
            ));
        }

        let config = cx.config();
        let kind = CollectionKind::from_unique_items(node.unique_items());
        let container = config.collections.container_for(kind);

        let item_name = singular(node_name);
        let base = cx
            .factory()
            .type_rule()
            .apply(&item_name, items, package, schema, cx)?;
        let element = element_type(base, config, container);

        debug!(
            node = node_name,
            ?kind,
            container = %container.implementation,
            element = %cx.model.display_type(&element),
            "resolved array type"
        );
        Ok(cx.model.parameterize(kind, &container.implementation, element))
    }
}

/// Apply the decimal and primitive policies to a resolved element type.
///
/// Non-scalar elements (classes, nested containers, untyped) pass through.
pub fn element_type(base: TypeRef, config: &GenerationConfig, container: &ContainerSpec) -> TypeRef {
    let TypeRef::Scalar(scalar) = base else {
        return base;
    };

    let kind = if scalar.kind.is_decimal() {
        if config.use_double_numbers {
            ScalarKind::Double
        } else {
            ScalarKind::Float
        }
    } else {
        scalar.kind
    };

    if config.use_primitives && container.primitive_elements {
        TypeRef::Scalar(ScalarType::unboxed(kind))
    } else {
        TypeRef::Scalar(ScalarType::boxed(kind))
    }
}
