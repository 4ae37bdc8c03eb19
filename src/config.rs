//! Generation configuration
//!
//! Read-only toggles consulted by rules to choose between equivalent output
//! shapes. Loaded from:
//! - Default values
//! - Config file (typegen.toml)
//! - Environment variables (TYPEGEN__*)
//!
//! ## Example config file (typegen.toml):
//! ```toml
//! use_primitives = true
//! use_double_numbers = true
//! known_annotations = ["com.acme.Audited"]
//!
//! [collections.ordered]
//! implementation = "List"
//! primitive_elements = false
//!
//! [collections.unique]
//! implementation = "Set"
//! primitive_elements = false
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypegenError};
use crate::markers::MarkerRegistry;
use crate::model::CollectionKind;

/// Options that steer the rule engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Backing containers for array schemas
    #[serde(default)]
    pub collections: CollectionConfig,

    /// Prefer unboxed scalar types where the surrounding type allows it
    #[serde(default)]
    pub use_primitives: bool,

    /// Map `number` to double precision instead of the default decimal type
    #[serde(default)]
    pub use_double_numbers: bool,

    /// Map `integer` to the 64-bit integer type
    #[serde(default)]
    pub use_long_integers: bool,

    /// Map `integer` to the arbitrary-precision integer type
    #[serde(default)]
    pub use_big_integers: bool,

    /// Map `number` to the arbitrary-precision decimal type
    #[serde(default)]
    pub use_big_decimals: bool,

    /// Annotation types the consumer already provides, resolvable without
    /// synthesis
    #[serde(default)]
    pub known_annotations: Vec<String>,
}

/// One substitutable container slot per collection kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    #[serde(default = "default_ordered")]
    pub ordered: ContainerSpec,

    #[serde(default = "default_unique")]
    pub unique: ContainerSpec,
}

/// A concrete container implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Runtime type name backing the collection
    pub implementation: String,

    /// Whether the container can hold unboxed scalars directly
    #[serde(default)]
    pub primitive_elements: bool,
}

impl ContainerSpec {
    pub fn new(implementation: impl Into<String>, primitive_elements: bool) -> Self {
        Self {
            implementation: implementation.into(),
            primitive_elements,
        }
    }
}

fn default_ordered() -> ContainerSpec {
    ContainerSpec::new("List", false)
}

fn default_unique() -> ContainerSpec {
    ContainerSpec::new("Set", false)
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            ordered: default_ordered(),
            unique: default_unique(),
        }
    }
}

impl CollectionConfig {
    /// The slot that backs `kind`
    pub fn container_for(&self, kind: CollectionKind) -> &ContainerSpec {
        match kind {
            CollectionKind::Ordered => &self.ordered,
            CollectionKind::Unique => &self.unique,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            collections: CollectionConfig::default(),
            use_primitives: false,
            use_double_numbers: false,
            use_long_integers: false,
            use_big_integers: false,
            use_big_decimals: false,
            known_annotations: Vec::new(),
        }
    }
}

impl GenerationConfig {
    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        for location in ["typegen.toml", ".typegen.toml", "config/typegen.toml"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "typegen") {
            let xdg_config = config_dir.config_dir().join("typegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TYPEGEN")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TypegenError::InvalidConfig(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject configurations no rule can honor
    pub fn validate(&self) -> Result<()> {
        for (slot, spec) in [
            ("collections.ordered", &self.collections.ordered),
            ("collections.unique", &self.collections.unique),
        ] {
            if spec.implementation.trim().is_empty() {
                return Err(TypegenError::InvalidConfig(format!(
                    "{slot}.implementation must name a container type"
                )));
            }
        }
        let registry = MarkerRegistry::empty();
        for name in &self.known_annotations {
            registry
                .check_name(name.trim())
                .map_err(|e| TypegenError::InvalidConfig(format!("known_annotations: {e}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.collections.ordered.implementation, "List");
        assert_eq!(config.collections.unique.implementation, "Set");
        assert!(!config.use_primitives);
        assert!(!config.use_double_numbers);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_container_for_kind() {
        let config = CollectionConfig::default();
        assert_eq!(config.container_for(CollectionKind::Unique).implementation, "Set");
        assert_eq!(config.container_for(CollectionKind::Ordered).implementation, "List");
    }

    #[test]
    fn test_serialize_config() {
        let config = GenerationConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[collections.ordered]"));
        assert!(toml_str.contains("use_double_numbers = false"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "use_double_numbers = true\n\n[collections.ordered]\nimplementation = \"Vec\"\nprimitive_elements = true"
        )
        .unwrap();

        let config = GenerationConfig::load_from(file.path().to_str()).unwrap();
        assert!(config.use_double_numbers);
        assert_eq!(config.collections.ordered, ContainerSpec::new("Vec", true));
        assert_eq!(config.collections.unique.implementation, "Set");
    }

    #[test]
    fn test_validate_rejects_blank_container() {
        let mut config = GenerationConfig::default();
        config.collections.unique.implementation = "  ".to_string();
        assert!(matches!(config.validate(), Err(TypegenError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_checks_known_annotation_names() {
        let mut config = GenerationConfig {
            known_annotations: vec!["com.acme.Audited".to_string(), " com.acme.Tracked ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        for bad in ["", "com..Bad", "com.acme.not valid", "9lives.Cat"] {
            config.known_annotations = vec![bad.to_string()];
            match config.validate() {
                Err(TypegenError::InvalidConfig(msg)) => assert!(msg.starts_with("known_annotations")),
                other => panic!("Expected InvalidConfig for {:?}, got {:?}", bad, other),
            }
        }
    }
}
