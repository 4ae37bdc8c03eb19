//! Annotation-Resolution Rule
//!
//! Attaches a marker type, named by the schema's `javaAnnotation` value, to a
//! field. Names the generator cannot resolve get an empty placeholder so the
//! model can still reference them; the consumer's own build supplies the real
//! type.

use tracing::debug;

use super::{Rule, RuleContext};
use crate::error::{Result, TypegenError};
use crate::markers::{MarkerId, TypeResolver};
use crate::model::FieldId;
use crate::schema::{SchemaContext, SchemaNode};

/// Property keyword holding one fully-qualified marker name, or an array of
/// them
pub const ANNOTATION_KEYWORD: &str = "javaAnnotation";

#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotationRule;

impl Rule<FieldId, FieldId> for AnnotationRule {
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        field: FieldId,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<FieldId> {
        let name = node.as_str().ok_or_else(|| {
            TypegenError::malformed(
                schema.locator(),
                node_name,
                format!("'{ANNOTATION_KEYWORD}' must be a fully-qualified type name"),
            )
        })?;

        let marker = resolve_marker(&mut *cx.markers, name)?;
        cx.model.attach_marker(field, marker);
        Ok(field)
    }
}

/// Resolve `name` against loadable types, synthesizing a placeholder on miss.
///
/// Lookup always runs before synthesis. A failed synthesis is reported as
/// `UnresolvableAnnotationType` carrying the synthesis error.
pub fn resolve_marker(resolver: &mut dyn TypeResolver, name: &str) -> Result<MarkerId> {
    if let Some(id) = resolver.resolve_loadable_type(name) {
        debug!(name, "marker type resolved");
        return Ok(id);
    }

    resolver
        .synthesize_placeholder_type(name)
        .map_err(|source| TypegenError::UnresolvableAnnotationType {
            name: name.to_string(),
            source: Box::new(source),
        })
}
