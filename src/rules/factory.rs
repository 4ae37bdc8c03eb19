//! Rule Factory
//!
//! Keyed lookup from construct tag to rule instance. Built once per run from
//! the generation configuration and passed around by reference.

use std::collections::HashMap;

use super::{
    AnnotationRule, AnyRule, ArrayRule, BooleanRule, IntegerRule, NumberRule, ObjectRule,
    PropertyRule, Rule, StringRule, TypeRule,
};
use crate::config::GenerationConfig;
use crate::model::{PackageId, TypeRef};
use crate::schema::SchemaType;

/// A rule that produces a type for a schema node
pub type TypeProducingRule = Box<dyn Rule<PackageId, TypeRef>>;

pub struct RuleFactory {
    config: GenerationConfig,
    type_rules: HashMap<SchemaType, TypeProducingRule>,
    type_rule: TypeRule,
    array: ArrayRule,
    object: ObjectRule,
    property: PropertyRule,
    annotation: AnnotationRule,
}

impl RuleFactory {
    /// Factory with a rule registered for every [`SchemaType`]
    pub fn new(config: GenerationConfig) -> Self {
        let mut factory = Self {
            config,
            type_rules: HashMap::new(),
            type_rule: TypeRule,
            array: ArrayRule,
            object: ObjectRule,
            property: PropertyRule,
            annotation: AnnotationRule,
        };

        factory.register(SchemaType::String, Box::new(StringRule));
        factory.register(SchemaType::Integer, Box::new(IntegerRule));
        factory.register(SchemaType::Number, Box::new(NumberRule));
        factory.register(SchemaType::Boolean, Box::new(BooleanRule));
        factory.register(SchemaType::Object, Box::new(ObjectRule));
        factory.register(SchemaType::Array, Box::new(ArrayRule));
        factory.register(SchemaType::Null, Box::new(AnyRule));
        factory.register(SchemaType::Any, Box::new(AnyRule));
        factory
    }

    /// Factory with no type-producing rules registered
    pub fn bare(config: GenerationConfig) -> Self {
        let mut factory = Self::new(config);
        factory.type_rules.clear();
        factory
    }

    /// Install or replace the rule for `tag`
    pub fn register(&mut self, tag: SchemaType, rule: TypeProducingRule) -> &mut Self {
        self.type_rules.insert(tag, rule);
        self
    }

    /// The rule registered for `tag`
    pub fn rule_for(&self, tag: SchemaType) -> Option<&dyn Rule<PackageId, TypeRef>> {
        self.type_rules.get(&tag).map(|rule| rule.as_ref())
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Dispatches on the node's declared `type`
    pub fn type_rule(&self) -> &TypeRule {
        &self.type_rule
    }

    pub fn array_rule(&self) -> &ArrayRule {
        &self.array
    }

    pub fn object_rule(&self) -> &ObjectRule {
        &self.object
    }

    pub fn property_rule(&self) -> &PropertyRule {
        &self.property
    }

    pub fn annotation_rule(&self) -> &AnnotationRule {
        &self.annotation
    }
}
