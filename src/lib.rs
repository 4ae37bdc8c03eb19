//! Familiar Type Generator
//!
//! Translates JSON Schema documents into an in-memory, object-oriented type
//! model (packages, classes, fields, type references) ready for emission.
//!
//! ## Architecture
//!
//! ```text
//! SchemaNode ──► RuleFactory ──► Rule::apply ──► TypeModel
//!                    │                │
//!                    │                └─► MarkerRegistry (resolve, then synthesize)
//!                    └─ GenerationConfig
//! ```
//!
//! - **Rules** map one schema construct to one model mutation
//!   ([`rules::ArrayRule`], [`rules::AnnotationRule`], scalar, object and
//!   property rules)
//! - **RuleFactory** is the keyed lookup from `type` keyword to rule
//! - **GenerationRun** owns one model and one marker registry; runs never
//!   share state

pub mod config;
pub mod error;
pub mod loader;
pub mod markers;
pub mod model;
pub mod names;
pub mod rules;
pub mod run;
pub mod schema;

pub use config::{CollectionConfig, ContainerSpec, GenerationConfig};
pub use error::{Result, TypegenError};
pub use markers::{MarkerId, MarkerOrigin, MarkerRegistry, TypeResolver};
pub use model::{CollectionKind, ScalarKind, ScalarType, TypeModel, TypeRef};
pub use rules::{Rule, RuleContext, RuleFactory};
pub use run::GenerationRun;
pub use schema::{SchemaContext, SchemaNode, SchemaType};
