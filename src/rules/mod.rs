//! Rule Engine
//!
//! A rule turns one schema construct into one type-model mutation and hands
//! back a handle its caller can embed. Rules are stateless; everything they
//! need arrives through [`RuleContext`]:
//! - the [`RuleFactory`] to reach configuration and the rules they delegate to
//! - the run's [`TypeModel`]
//! - the run's marker [`TypeResolver`]
//!
//! Traversal is synchronous and fail-fast: the first error aborts the run.

pub mod annotation;
pub mod array;
pub mod factory;
pub mod object;
pub mod property;
pub mod scalar;
pub mod type_rule;

pub use annotation::{resolve_marker, AnnotationRule, ANNOTATION_KEYWORD};
pub use array::ArrayRule;
pub use factory::RuleFactory;
pub use object::ObjectRule;
pub use property::{PropertyRule, PropertyTarget};
pub use scalar::{AnyRule, BooleanRule, IntegerRule, NumberRule, StringRule};
pub use type_rule::TypeRule;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::markers::TypeResolver;
use crate::model::TypeModel;
use crate::schema::{SchemaContext, SchemaNode};

/// A transformation from a schema construct onto a target handle
pub trait Rule<T, R> {
    /// Apply the rule.
    ///
    /// `node_name` is the property or document name the node was found
    /// under. `target` is what the rule builds into or mutates.
    fn apply(
        &self,
        node_name: &str,
        node: SchemaNode<'_>,
        target: T,
        schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<R>;
}

/// Mutable run state threaded through every rule invocation
pub struct RuleContext<'a> {
    factory: &'a RuleFactory,
    pub model: &'a mut TypeModel,
    pub markers: &'a mut dyn TypeResolver,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        factory: &'a RuleFactory,
        model: &'a mut TypeModel,
        markers: &'a mut dyn TypeResolver,
    ) -> Self {
        Self {
            factory,
            model,
            markers,
        }
    }

    pub fn factory(&self) -> &'a RuleFactory {
        self.factory
    }

    pub fn config(&self) -> &'a GenerationConfig {
        self.factory.config()
    }
}
