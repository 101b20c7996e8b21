use crate::structures::scanning::comparisons::scan_function_scalar::{ScalarCompareFnDelta, ScalarCompareFnImmediate, ScalarCompareFnRelative, ScanFunctionScalar};
use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

/// Builds the scalar ("one element at a time") compare closures for a single leaf constraint,
/// bound to a specific concrete data type. Every `DataType` implementor also implements this so
/// the scan driver can ask, per leaf, "give me your compiled comparer" without the driver itself
/// knowing anything about the underlying primitive.
///
/// Each method returns `None` if the constraint's compare kind does not apply to this type (e.g.
/// `ShiftLeftBy` against a floating-point type), letting the caller treat the leaf as unsupported
/// for this data type rather than panicking.
pub trait ScalarComparable {
    fn get_compare_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_not_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_greater_than(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_greater_than_or_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_less_than(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_less_than_or_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate>;

    fn get_compare_changed(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative>;

    fn get_compare_unchanged(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative>;

    fn get_compare_increased(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative>;

    fn get_compare_decreased(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative>;

    fn get_compare_increased_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_decreased_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_multiplied_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_divided_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_modulo_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_shift_left_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_shift_right_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_logical_and_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_logical_or_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    fn get_compare_logical_xor_by(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta>;

    /// Dispatches on `scan_constraint`'s compare kind to the matching `get_compare_*` above.
    /// This is the single entry point the scan driver's compile step actually calls.
    fn build_scalar_compare_fn(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScanFunctionScalar> {
        use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta, ScanCompareTypeImmediate, ScanCompareTypeRelative};

        match scan_constraint.get_compare_type() {
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal) => self.get_compare_equal(scan_constraint).map(ScanFunctionScalar::Immediate),
            ScanCompareType::Immediate(ScanCompareTypeImmediate::NotEqual) => self.get_compare_not_equal(scan_constraint).map(ScanFunctionScalar::Immediate),
            ScanCompareType::Immediate(ScanCompareTypeImmediate::GreaterThan) => self.get_compare_greater_than(scan_constraint).map(ScanFunctionScalar::Immediate),
            ScanCompareType::Immediate(ScanCompareTypeImmediate::GreaterThanOrEqual) => {
                self.get_compare_greater_than_or_equal(scan_constraint).map(ScanFunctionScalar::Immediate)
            }
            ScanCompareType::Immediate(ScanCompareTypeImmediate::LessThan) => self.get_compare_less_than(scan_constraint).map(ScanFunctionScalar::Immediate),
            ScanCompareType::Immediate(ScanCompareTypeImmediate::LessThanOrEqual) => {
                self.get_compare_less_than_or_equal(scan_constraint).map(ScanFunctionScalar::Immediate)
            }
            ScanCompareType::Relative(ScanCompareTypeRelative::Changed) => self.get_compare_changed(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Relative(ScanCompareTypeRelative::Unchanged) => self.get_compare_unchanged(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Relative(ScanCompareTypeRelative::Increased) => self.get_compare_increased(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Relative(ScanCompareTypeRelative::Decreased) => self.get_compare_decreased(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::IncreasedBy) => self.get_compare_increased_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::DecreasedBy) => self.get_compare_decreased_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::MultipliedBy) => self.get_compare_multiplied_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::DividedBy) => self.get_compare_divided_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::ModuloBy) => self.get_compare_modulo_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::ShiftLeftBy) => self.get_compare_shift_left_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::ShiftRightBy) => self.get_compare_shift_right_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::LogicalAndBy) => self.get_compare_logical_and_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::LogicalOrBy) => self.get_compare_logical_or_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
            ScanCompareType::Delta(ScanCompareTypeDelta::LogicalXorBy) => self.get_compare_logical_xor_by(scan_constraint).map(ScanFunctionScalar::RelativeOrDelta),
        }
    }

    /// Builds the vectorized comparer for this leaf, or `None` if this type has no vectorized
    /// form (e.g. the byte-array type, whose pattern length is not known at compile time).
    /// Numeric types override this; the default covers types with no SIMD fast path.
    fn build_vector_compare_fn(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<crate::structures::scanning::comparisons::scan_function_vector::ScanFunctionVector> {
        None
    }
}
