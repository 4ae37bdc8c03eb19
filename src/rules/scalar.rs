//! Scalar type rules
//!
//! Map `integer`, `number`, `boolean`, `string` and untyped nodes to scalar
//! type references according to the numeric and primitive toggles.

use super::{Rule, RuleContext};
use crate::error::Result;
use crate::model::{PackageId, ScalarKind, TypeRef};
use crate::schema::{SchemaContext, SchemaNode};

/// `integer`
///
/// Widens to 64 bits when `use_long_integers` is set or when `minimum` or
/// `maximum` fall outside the 32-bit range.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerRule;

impl Rule<PackageId, TypeRef> for IntegerRule {
    fn apply(
        &self,
        _node_name: &str,
        node: SchemaNode<'_>,
        _package: PackageId,
        _schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let config = cx.config();
        let kind = if config.use_big_integers {
            ScalarKind::BigInteger
        } else if config.use_long_integers || exceeds_int_range(node) {
            ScalarKind::Long
        } else {
            ScalarKind::Int
        };
        Ok(cx.model.reference_type(kind, config.use_primitives))
    }
}

fn exceeds_int_range(node: SchemaNode<'_>) -> bool {
    let out_of_range = |v: f64| v < f64::from(i32::MIN) || v > f64::from(i32::MAX);
    node.number("minimum").map_or(false, out_of_range)
        || node.number("maximum").map_or(false, out_of_range)
}

/// `number`
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberRule;

impl Rule<PackageId, TypeRef> for NumberRule {
    fn apply(
        &self,
        _node_name: &str,
        _node: SchemaNode<'_>,
        _package: PackageId,
        _schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let config = cx.config();
        let kind = if config.use_big_decimals {
            ScalarKind::BigDecimal
        } else if config.use_double_numbers {
            ScalarKind::Double
        } else {
            ScalarKind::Float
        };
        Ok(cx.model.reference_type(kind, config.use_primitives))
    }
}

/// `boolean`
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanRule;

impl Rule<PackageId, TypeRef> for BooleanRule {
    fn apply(
        &self,
        _node_name: &str,
        _node: SchemaNode<'_>,
        _package: PackageId,
        _schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        let primitive = cx.config().use_primitives;
        Ok(cx.model.reference_type(ScalarKind::Boolean, primitive))
    }
}

/// `string`
#[derive(Debug, Default, Clone, Copy)]
pub struct StringRule;

impl Rule<PackageId, TypeRef> for StringRule {
    fn apply(
        &self,
        _node_name: &str,
        _node: SchemaNode<'_>,
        _package: PackageId,
        _schema: &SchemaContext,
        cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        Ok(cx.model.reference_type(ScalarKind::String, false))
    }
}

/// Untyped and `null` nodes
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyRule;

impl Rule<PackageId, TypeRef> for AnyRule {
    fn apply(
        &self,
        _node_name: &str,
        _node: SchemaNode<'_>,
        _package: PackageId,
        _schema: &SchemaContext,
        _cx: &mut RuleContext<'_>,
    ) -> Result<TypeRef> {
        Ok(TypeRef::Any)
    }
}
