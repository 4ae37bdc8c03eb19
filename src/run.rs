//! Generation Run
//!
//! Owns the state of one schema-to-type-model pass: the rule factory, the
//! type model and the marker registry. Runs never share state; documents
//! processed concurrently each need their own run.

use serde_json::Value;
use tracing::{info, info_span};

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::markers::MarkerRegistry;
use crate::model::{ClassId, TypeModel};
use crate::rules::{RuleContext, RuleFactory};
use crate::schema::{SchemaContext, SchemaNode};

pub struct GenerationRun {
    factory: RuleFactory,
    model: TypeModel,
    markers: MarkerRegistry,
}

impl GenerationRun {
    /// Start a run. The configuration is validated first.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        let markers = MarkerRegistry::with_known(&config.known_annotations);
        Ok(Self {
            factory: RuleFactory::new(config),
            model: TypeModel::new(),
            markers,
        })
    }

    /// Generate the root class for one document.
    ///
    /// On error the model may hold a partial result and the run should be
    /// discarded.
    pub fn generate(
        &mut self,
        locator: &str,
        root: &Value,
        package: &str,
        root_name: &str,
    ) -> Result<ClassId> {
        let _span = info_span!("generate", locator).entered();
        let schema = SchemaContext::new(locator);
        let package = self.model.package(package);

        let mut cx = self.context();
        let object_rule = cx.factory().object_rule();
        let class = object_rule.declare(root_name, SchemaNode::new(root), package, &schema, &mut cx)?;

        info!(
            classes = self.model.class_count(),
            synthesized = self.markers.synthesized_count(),
            "generated type model"
        );
        Ok(class)
    }

    /// Borrow the run state for direct rule application
    pub fn context(&mut self) -> RuleContext<'_> {
        RuleContext::new(&self.factory, &mut self.model, &mut self.markers)
    }

    pub fn factory(&self) -> &RuleFactory {
        &self.factory
    }

    pub fn model(&self) -> &TypeModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TypeModel {
        &mut self.model
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    /// Listing of the generated classes with their markers
    pub fn describe(&self) -> String {
        self.model.describe(&self.markers)
    }

    pub fn into_parts(self) -> (TypeModel, MarkerRegistry) {
        (self.model, self.markers)
    }
}
