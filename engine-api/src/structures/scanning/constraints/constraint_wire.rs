use crate::structures::data_types::data_type::DataType;
use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::data_type_ref::DataTypeRef;
use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use crate::structures::data_values::anonymous_value_string::AnonymousValueString;
use crate::structures::data_values::anonymous_value_string_format::AnonymousValueStringFormat;
use crate::structures::data_values::container_type::ContainerType;
use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta, ScanCompareTypeImmediate, ScanCompareTypeRelative};
use crate::structures::scanning::constraints::boolean_operator::BooleanOperator;
use crate::structures::scanning::constraints::constraint_node::ConstraintNode;
use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;
use serde::{Deserialize, Serialize};

/// The JSON-compatible wire shape for a constraint tree, as sent by CLI / RPC consumers. A
/// literal is a plain string and is deanonymized against the scan's declared data type when the
/// tree is resolved into a `ConstraintNode`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintWire {
    Operation {
        op: BooleanOperator,
        left: Box<ConstraintWire>,
        right: Box<ConstraintWire>,
    },
    Leaf {
        kind: String,
        value: Option<String>,
    },
}

impl ConstraintWire {
    /// Resolves this wire tree into an internal `ConstraintNode`, deanonymizing every leaf's
    /// literal (when present) against `data_type`. Fails with `DataTypeError::ParseError` on an
    /// unknown `kind` name or a literal that does not parse under the target type.
    pub fn resolve(
        &self,
        data_type: &dyn DataType,
        data_type_ref: &DataTypeRef,
        floating_point_tolerance: FloatingPointTolerance,
    ) -> Result<ConstraintNode, DataTypeError> {
        match self {
            ConstraintWire::Operation { op, left, right } => {
                let left_node = left.resolve(data_type, data_type_ref, floating_point_tolerance)?;
                let right_node = right.resolve(data_type, data_type_ref, floating_point_tolerance)?;
                Ok(ConstraintNode::operation(*op, left_node, right_node))
            }
            ConstraintWire::Leaf { kind, value } => {
                let compare_type = parse_compare_kind(kind)?;
                let compare_value = match &compare_type {
                    ScanCompareType::Immediate(_) | ScanCompareType::Delta(_) => {
                        let literal = value.clone().ok_or_else(|| DataTypeError::ParseError(format!("constraint kind '{}' requires a value", kind)))?;
                        let anonymous_value_string = AnonymousValueString::new(literal, AnonymousValueStringFormat::Decimal, ContainerType::Scalar);
                        data_type.deanonymize_value_string(&anonymous_value_string)?
                    }
                    ScanCompareType::Relative(_) => data_type.get_default_value(data_type_ref.clone()),
                };
                Ok(ConstraintNode::leaf(ScanConstraint::new(compare_type, compare_value, floating_point_tolerance)))
            }
        }
    }
}

fn parse_compare_kind(kind: &str) -> Result<ScanCompareType, DataTypeError> {
    let compare_type = match kind {
        "Eq" => ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
        "NeQ" => ScanCompareType::Immediate(ScanCompareTypeImmediate::NotEqual),
        "Gt" => ScanCompareType::Immediate(ScanCompareTypeImmediate::GreaterThan),
        "Ge" => ScanCompareType::Immediate(ScanCompareTypeImmediate::GreaterThanOrEqual),
        "Lt" => ScanCompareType::Immediate(ScanCompareTypeImmediate::LessThan),
        "Le" => ScanCompareType::Immediate(ScanCompareTypeImmediate::LessThanOrEqual),
        "Unchanged" => ScanCompareType::Relative(ScanCompareTypeRelative::Unchanged),
        "Changed" => ScanCompareType::Relative(ScanCompareTypeRelative::Changed),
        "Increased" => ScanCompareType::Relative(ScanCompareTypeRelative::Increased),
        "Decreased" => ScanCompareType::Relative(ScanCompareTypeRelative::Decreased),
        "IncreasedBy" => ScanCompareType::Delta(ScanCompareTypeDelta::IncreasedBy),
        "DecreasedBy" => ScanCompareType::Delta(ScanCompareTypeDelta::DecreasedBy),
        "MultipliedBy" => ScanCompareType::Delta(ScanCompareTypeDelta::MultipliedBy),
        "DividedBy" => ScanCompareType::Delta(ScanCompareTypeDelta::DividedBy),
        "ModuloBy" => ScanCompareType::Delta(ScanCompareTypeDelta::ModuloBy),
        "ShiftLeftBy" => ScanCompareType::Delta(ScanCompareTypeDelta::ShiftLeftBy),
        "ShiftRightBy" => ScanCompareType::Delta(ScanCompareTypeDelta::ShiftRightBy),
        "LogicalAndBy" => ScanCompareType::Delta(ScanCompareTypeDelta::LogicalAndBy),
        "LogicalOrBy" => ScanCompareType::Delta(ScanCompareTypeDelta::LogicalOrBy),
        "LogicalXorBy" => ScanCompareType::Delta(ScanCompareTypeDelta::LogicalXorBy),
        other => return Err(DataTypeError::ParseError(format!("unknown constraint kind '{}'", other))),
    };

    Ok(compare_type)
}
