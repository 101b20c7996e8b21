use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::scannable_data_type::ScannableDataType;
use crate::structures::scanning::comparisons::scan_function_scalar::ScanFunctionScalar;
use crate::structures::scanning::comparisons::scan_function_vector::{ScanFunctionVector, ScanVector};
use crate::structures::scanning::constraints::boolean_operator::BooleanOperator;
use crate::structures::scanning::constraints::constraint_node::ConstraintNode;
use crate::structures::scanning::constraints::scan_constraint_finalized::ScanConstraintFinalized;
use std::sync::Arc;

/// Current-and-previous-pointer compare action. Immediate leaves ignore the previous pointer;
/// this uniform shape is what lets an interior node fold its children with a boolean operator
/// without knowing whether either side is an immediate or a relative/delta leaf.
pub type CompiledScalarFn<'a> = Box<dyn Fn(*const u8, *const u8) -> bool + Send + Sync + 'a>;
pub type CompiledVectorFn<'a> = Box<dyn Fn(*const u8, *const u8) -> ScanVector + Send + Sync + 'a>;

/// A constraint tree whose every leaf's compare action is already built (see
/// `ScanConstraintFinalized`) and whose every interior node's boolean combinator is ready to fold
/// its children's results. This is the "compile step" for a whole tree: `build_scalar_compare_fn`
/// and `build_vector_compare_fn` recurse exactly once, at plan-build time, never per element.
pub enum ConstraintNodeFinalized {
    Leaf(ScanConstraintFinalized),
    Operation {
        operator: BooleanOperator,
        left: Box<ConstraintNodeFinalized>,
        right: Box<ConstraintNodeFinalized>,
    },
}

impl ConstraintNodeFinalized {
    pub fn new(constraint_node: ConstraintNode) -> Result<Self, DataTypeError> {
        Ok(match constraint_node {
            ConstraintNode::Leaf(scan_constraint) => ConstraintNodeFinalized::Leaf(ScanConstraintFinalized::new(scan_constraint)?),
            ConstraintNode::Operation { operator, left, right } => ConstraintNodeFinalized::Operation {
                operator,
                left: Box::new(ConstraintNodeFinalized::new(*left)?),
                right: Box::new(ConstraintNodeFinalized::new(*right)?),
            },
        })
    }

    pub fn is_relative(&self) -> bool {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => leaf.is_relative(),
            ConstraintNodeFinalized::Operation { left, right, .. } => left.is_relative() || right.is_relative(),
        }
    }

    /// True only if every leaf agrees on relative-vs-immediate: a tree cannot mix a leaf that
    /// needs a previous-sample buffer with one that doesn't, since the driver decides once, for
    /// the whole tree, whether to load previous bytes at all. Checked by the scan driver before a
    /// plan is built (see `ScanError::InvalidArguments`).
    pub fn has_uniform_relativity(&self) -> bool {
        fn all_relative(node: &ConstraintNodeFinalized, expected: bool) -> bool {
            match node {
                ConstraintNodeFinalized::Leaf(leaf) => leaf.is_relative() == expected,
                ConstraintNodeFinalized::Operation { left, right, .. } => all_relative(left, expected) && all_relative(right, expected),
            }
        }

        fn first_leaf_relative(node: &ConstraintNodeFinalized) -> bool {
            match node {
                ConstraintNodeFinalized::Leaf(leaf) => leaf.is_relative(),
                ConstraintNodeFinalized::Operation { left, .. } => first_leaf_relative(left),
            }
        }

        all_relative(self, first_leaf_relative(self))
    }

    /// True only if every leaf built a scalar compare action. The driver rejects the whole tree
    /// with `UnsupportedType` rather than silently dropping an unsupported leaf from the fold.
    pub fn is_supported(&self) -> bool {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => leaf.is_supported(),
            ConstraintNodeFinalized::Operation { left, right, .. } => left.is_supported() && right.is_supported(),
        }
    }

    pub fn has_vector_support(&self) -> bool {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => leaf.get_scan_function_vector().is_some(),
            ConstraintNodeFinalized::Operation { left, right, .. } => left.has_vector_support() && right.has_vector_support(),
        }
    }

    /// Every leaf is resolved against the same scan's declared type, so any leaf's data type
    /// speaks for the whole tree.
    pub fn first_data_type(&self) -> &Arc<dyn ScannableDataType> {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => leaf.get_data_type(),
            ConstraintNodeFinalized::Operation { left, .. } => left.first_data_type(),
        }
    }

    pub fn build_scalar_compare_fn(&self) -> Option<CompiledScalarFn<'_>> {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => {
                let scan_function_scalar = leaf.get_scan_function_scalar()?;
                Some(wrap_scalar(scan_function_scalar))
            }
            ConstraintNodeFinalized::Operation { operator, left, right } => {
                let left_fn = left.build_scalar_compare_fn()?;
                let right_fn = right.build_scalar_compare_fn()?;
                Some(combine_scalar(*operator, left_fn, right_fn))
            }
        }
    }

    pub fn build_vector_compare_fn(&self) -> Option<CompiledVectorFn<'_>> {
        match self {
            ConstraintNodeFinalized::Leaf(leaf) => {
                let scan_function_vector = leaf.get_scan_function_vector()?;
                Some(wrap_vector(scan_function_vector))
            }
            ConstraintNodeFinalized::Operation { operator, left, right } => {
                let left_fn = left.build_vector_compare_fn()?;
                let right_fn = right.build_vector_compare_fn()?;
                Some(combine_vector(*operator, left_fn, right_fn))
            }
        }
    }
}

fn wrap_scalar(scan_function_scalar: &ScanFunctionScalar) -> CompiledScalarFn<'_> {
    match scan_function_scalar {
        ScanFunctionScalar::Immediate(compare) => Box::new(move |current, _previous| compare(current)),
        ScanFunctionScalar::RelativeOrDelta(compare) => Box::new(move |current, previous| compare(current, previous)),
    }
}

fn wrap_vector(scan_function_vector: &ScanFunctionVector) -> CompiledVectorFn<'_> {
    match scan_function_vector {
        ScanFunctionVector::Immediate(compare) => Box::new(move |current, _previous| compare(current)),
        ScanFunctionVector::RelativeOrDelta(compare) => Box::new(move |current, previous| compare(current, previous)),
    }
}

fn combine_scalar<'a>(
    operator: BooleanOperator,
    left: CompiledScalarFn<'a>,
    right: CompiledScalarFn<'a>,
) -> CompiledScalarFn<'a> {
    match operator {
        BooleanOperator::And => Box::new(move |current, previous| left(current, previous) && right(current, previous)),
        BooleanOperator::Or => Box::new(move |current, previous| left(current, previous) || right(current, previous)),
        BooleanOperator::Xor => Box::new(move |current, previous| left(current, previous) != right(current, previous)),
    }
}

fn combine_vector<'a>(
    operator: BooleanOperator,
    left: CompiledVectorFn<'a>,
    right: CompiledVectorFn<'a>,
) -> CompiledVectorFn<'a> {
    match operator {
        BooleanOperator::And => Box::new(move |current, previous| {
            let left_result = left(current, previous);
            if left_result == ScanVector::splat(0) {
                return left_result;
            }
            left_result & right(current, previous)
        }),
        BooleanOperator::Or => Box::new(move |current, previous| {
            let left_result = left(current, previous);
            if left_result == ScanVector::splat(0xFF) {
                return left_result;
            }
            left_result | right(current, previous)
        }),
        BooleanOperator::Xor => Box::new(move |current, previous| left(current, previous) ^ right(current, previous)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::data_types::built_in_types::i32::DataTypeI32;
    use crate::structures::data_types::data_type_ref::DataTypeRef;
    use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use crate::structures::data_values::data_value::DataValue;
    use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};
    use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

    fn leaf_gt(value: i32) -> ConstraintNode {
        ConstraintNode::leaf(ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::GreaterThan),
            DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), value.to_le_bytes().to_vec()),
            FloatingPointTolerance::default(),
        ))
    }

    fn leaf_lt(value: i32) -> ConstraintNode {
        ConstraintNode::leaf(ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::LessThan),
            DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), value.to_le_bytes().to_vec()),
            FloatingPointTolerance::default(),
        ))
    }

    #[test]
    fn and_tree_passes_only_within_both_bounds() {
        let tree = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::And, leaf_gt(5), leaf_lt(20))).unwrap();
        let compare = tree.build_scalar_compare_fn().unwrap();

        let ten = 10i32.to_le_bytes();
        let twenty_five = 25i32.to_le_bytes();
        assert!(compare(ten.as_ptr(), std::ptr::null()));
        assert!(!compare(twenty_five.as_ptr(), std::ptr::null()));
    }

    #[test]
    fn xor_tree_vector_fold_matches_scalar_fold() {
        let tree = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::Xor, leaf_gt(5), leaf_gt(20))).unwrap();
        assert!(tree.has_vector_support());

        let scalar = tree.build_scalar_compare_fn().unwrap();
        let vector = tree.build_vector_compare_fn().unwrap();

        let ten = 10i32.to_le_bytes();
        assert!(scalar(ten.as_ptr(), std::ptr::null()));
        let mut padded = [0u8; crate::structures::scanning::comparisons::scan_function_vector::VECTOR_LANES];
        padded[0..4].copy_from_slice(&ten);
        let result = vector(padded.as_ptr(), std::ptr::null());
        assert_eq!(result.to_array()[0], 0xFF);
    }

    #[test]
    fn and_tree_all_false_left_short_circuits_to_all_false() {
        let tree = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::And, leaf_gt(1000), leaf_gt(5))).unwrap();
        let vector = tree.build_vector_compare_fn().unwrap();

        let padded = [0u8; crate::structures::scanning::comparisons::scan_function_vector::VECTOR_LANES];
        let result = vector(padded.as_ptr(), std::ptr::null());
        assert_eq!(result, ScanVector::splat(0));
    }

    #[test]
    fn or_tree_all_true_left_short_circuits_to_all_true() {
        let tree = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::Or, leaf_gt(-1), leaf_gt(5))).unwrap();
        let vector = tree.build_vector_compare_fn().unwrap();

        let mut padded = [0u8; crate::structures::scanning::comparisons::scan_function_vector::VECTOR_LANES];
        padded[0..4].copy_from_slice(&10i32.to_le_bytes());
        let result = vector(padded.as_ptr(), std::ptr::null());
        assert_eq!(result.to_array()[0], 0xFF);
    }

    #[test]
    fn mixed_relative_and_immediate_leaves_are_not_uniform() {
        let immediate = leaf_gt(5);
        let relative = ConstraintNode::leaf(ScanConstraint::new(
            ScanCompareType::Relative(crate::structures::scanning::comparisons::scan_compare_type::ScanCompareTypeRelative::Increased),
            DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 0i32.to_le_bytes().to_vec()),
            FloatingPointTolerance::default(),
        ));

        let uniform = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::And, leaf_gt(5), leaf_lt(20))).unwrap();
        assert!(uniform.has_uniform_relativity());

        let mixed = ConstraintNodeFinalized::new(ConstraintNode::operation(BooleanOperator::And, immediate, relative)).unwrap();
        assert!(!mixed.has_uniform_relativity());
    }
}
