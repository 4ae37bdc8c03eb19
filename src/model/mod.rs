//! Type Model
//!
//! Arena of packages, classes and fields built up during one generation run.
//! Entities are addressed by copyable ids and are never removed; the whole
//! model is dropped once the caller has consumed it.
//!
//! Rules only call into the builder API here:
//! - `declare_class` / `declare_field`
//! - `reference_type` / `parameterize`
//! - `attach_marker`

mod types;

pub use types::{CollectionKind, ContainerType, ScalarKind, ScalarType, TypeRef};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::markers::{MarkerId, MarkerRegistry};

// =============================================================================
// Ids
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(usize);

// =============================================================================
// Definitions
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageDef {
    pub name: String,
    pub classes: Vec<ClassId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    pub package: PackageId,
    pub name: String,
    pub fields: Vec<FieldId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    pub owner: ClassId,
    /// Name in generated code
    pub name: String,
    /// Property name in the schema
    pub json_name: String,
    pub ty: TypeRef,
    pub required: bool,
    /// Marker types attached to the field, in attachment order
    pub markers: Vec<MarkerId>,
}

// =============================================================================
// Type Model
// =============================================================================

/// Mutable model of the classes being generated
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TypeModel {
    packages: Vec<PackageDef>,
    classes: Vec<ClassDef>,
    fields: Vec<FieldDef>,
    #[serde(skip)]
    package_index: HashMap<String, PackageId>,
}

impl TypeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the package with `name`
    pub fn package(&mut self, name: &str) -> PackageId {
        if let Some(id) = self.package_index.get(name) {
            return *id;
        }
        let id = PackageId(self.packages.len());
        self.packages.push(PackageDef {
            name: name.to_string(),
            classes: Vec::new(),
        });
        self.package_index.insert(name.to_string(), id);
        id
    }

    /// Declare a class in `package`.
    ///
    /// Names are unique per package; a taken name gets a numeric suffix.
    pub fn declare_class(&mut self, package: PackageId, name: &str) -> ClassId {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while self.class_by_name(package, &candidate).is_some() {
            suffix += 1;
            candidate = format!("{name}{suffix}");
        }
        if suffix > 1 {
            debug!(requested = name, assigned = %candidate, "class name taken, disambiguated");
        }

        let id = ClassId(self.classes.len());
        self.classes.push(ClassDef {
            package,
            name: candidate,
            fields: Vec::new(),
        });
        self.packages[package.0].classes.push(id);
        id
    }

    /// Declare a field on `owner`.
    ///
    /// Names are unique per class, disambiguated like class names.
    pub fn declare_field(
        &mut self,
        owner: ClassId,
        name: &str,
        json_name: &str,
        ty: TypeRef,
        required: bool,
    ) -> FieldId {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while self.field_by_name(owner, &candidate).is_some() {
            suffix += 1;
            candidate = format!("{name}{suffix}");
        }
        if suffix > 1 {
            debug!(json_name, assigned = %candidate, "field name taken, disambiguated");
        }

        let id = FieldId(self.fields.len());
        self.fields.push(FieldDef {
            owner,
            name: candidate,
            json_name: json_name.to_string(),
            ty,
            required,
            markers: Vec::new(),
        });
        self.classes[owner.0].fields.push(id);
        id
    }

    /// Reference a scalar type in the requested representation
    pub fn reference_type(&self, kind: ScalarKind, primitive: bool) -> TypeRef {
        if primitive {
            TypeRef::Scalar(ScalarType::unboxed(kind))
        } else {
            TypeRef::Scalar(ScalarType::boxed(kind))
        }
    }

    pub fn class_ref(&self, class: ClassId) -> TypeRef {
        TypeRef::Class { id: class }
    }

    /// Bind a container to its single element type
    pub fn parameterize(
        &self,
        kind: CollectionKind,
        implementation: &str,
        element: TypeRef,
    ) -> TypeRef {
        TypeRef::Container(Box::new(ContainerType {
            kind,
            implementation: implementation.to_string(),
            element,
        }))
    }

    /// Attach `marker` to `field`. Attaching the same marker twice is a no-op.
    pub fn attach_marker(&mut self, field: FieldId, marker: MarkerId) {
        let markers = &mut self.fields[field.0].markers;
        if !markers.contains(&marker) {
            markers.push(marker);
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn class(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.0]
    }

    pub fn field(&self, id: FieldId) -> &FieldDef {
        &self.fields[id.0]
    }

    pub fn class_by_name(&self, package: PackageId, name: &str) -> Option<ClassId> {
        self.packages[package.0]
            .classes
            .iter()
            .copied()
            .find(|id| self.classes[id.0].name == name)
    }

    /// Fully-qualified class name (`package.Class`)
    pub fn qualified_name(&self, id: ClassId) -> String {
        let class = &self.classes[id.0];
        let package = &self.packages[class.package.0].name;
        if package.is_empty() {
            class.name.clone()
        } else {
            format!("{}.{}", package, class.name)
        }
    }

    /// Field of `class` by its generated name
    pub fn field_by_name(&self, class: ClassId, name: &str) -> Option<FieldId> {
        self.classes[class.0]
            .fields
            .iter()
            .copied()
            .find(|id| self.fields[id.0].name == name)
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDef)> {
        self.classes.iter().enumerate().map(|(i, c)| (ClassId(i), c))
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Render a type reference for diagnostics
    pub fn display_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Scalar(scalar) => scalar.name().to_string(),
            TypeRef::Class { id } => self.qualified_name(*id),
            TypeRef::Container(container) => format!(
                "{}<{}>",
                container.implementation,
                self.display_type(&container.element)
            ),
            TypeRef::Any => "Object".to_string(),
        }
    }

    /// Human-readable listing of every class, field and marker
    pub fn describe(&self, markers: &MarkerRegistry) -> String {
        let mut output = String::new();
        for (id, class) in self.classes() {
            output.push_str(&format!("class {}\n", self.qualified_name(id)));
            for field_id in &class.fields {
                let field = self.field(*field_id);
                for marker in &field.markers {
                    if let Some(marker) = markers.get(*marker) {
                        output.push_str(&format!("    @{}\n", marker.name));
                    }
                }
                let optional = if field.required { "" } else { "?" };
                output.push_str(&format!(
                    "    {}{}: {}\n",
                    field.name,
                    optional,
                    self.display_type(&field.ty)
                ));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_class_disambiguates() {
        let mut model = TypeModel::new();
        let pkg = model.package("com.example");
        let first = model.declare_class(pkg, "Item");
        let second = model.declare_class(pkg, "Item");

        assert_ne!(first, second);
        assert_eq!(model.class(first).name, "Item");
        assert_eq!(model.class(second).name, "Item2");
        assert_eq!(model.qualified_name(second), "com.example.Item2");
    }

    #[test]
    fn test_package_is_reused() {
        let mut model = TypeModel::new();
        assert_eq!(model.package("a.b"), model.package("a.b"));
        assert_ne!(model.package("a.b"), model.package("a.c"));
    }

    #[test]
    fn test_parameterize_display() {
        let mut model = TypeModel::new();
        let element = model.reference_type(ScalarKind::Int, false);
        let list = model.parameterize(CollectionKind::Ordered, "List", element);
        let nested = model.parameterize(CollectionKind::Unique, "Set", list);

        assert_eq!(model.display_type(&nested), "Set<List<Integer>>");

        let pkg = model.package("");
        let class = model.declare_class(pkg, "Root");
        assert_eq!(model.display_type(&model.class_ref(class)), "Root");
    }

    #[test]
    fn test_declare_field_disambiguates_within_class() {
        let mut model = TypeModel::new();
        let pkg = model.package("p");
        let holder = model.declare_class(pkg, "Holder");
        let other = model.declare_class(pkg, "Other");

        let first = model.declare_field(holder, "firstName", "first-name", TypeRef::Any, false);
        let second = model.declare_field(holder, "firstName", "first_name", TypeRef::Any, true);
        let elsewhere = model.declare_field(other, "firstName", "firstName", TypeRef::Any, false);

        assert_eq!(model.field(first).name, "firstName");
        assert_eq!(model.field(second).name, "firstName2");
        assert_eq!(model.field(second).json_name, "first_name");
        assert_eq!(model.field(elsewhere).name, "firstName");
        assert_eq!(model.field_by_name(holder, "firstName2"), Some(second));
    }
}
