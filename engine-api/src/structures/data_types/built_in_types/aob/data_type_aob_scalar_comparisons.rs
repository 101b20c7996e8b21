use crate::structures::data_types::built_in_types::aob::data_type_aob::DataTypeAob;
use crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable;
use crate::structures::scanning::comparisons::scan_function_scalar::{ScalarCompareFnDelta, ScalarCompareFnImmediate, ScalarCompareFnRelative};
use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

/// Only `Eq`/`NeQ` (pattern match) and `Changed`/`Unchanged` (byte equality) are meaningful for
/// an opaque byte pattern -- there is no natural ordering or arithmetic over an AOB value, so the
/// remaining kinds all return `None` and the scan driver treats the leaf as unsupported for this
/// type (`UnsupportedType`).
impl ScalarComparable for DataTypeAob {
    fn get_compare_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        let pattern = scan_constraint.get_compare_value().get_value_bytes().to_vec();
        if pattern.is_empty() {
            return None;
        }
        let length = pattern.len();
        Some(Box::new(move |current| unsafe { std::slice::from_raw_parts(current, length) == pattern.as_slice() }))
    }

    fn get_compare_not_equal(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        let equal = self.get_compare_equal(scan_constraint)?;
        Some(Box::new(move |current| !equal(current)))
    }

    fn get_compare_greater_than(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        None
    }

    fn get_compare_greater_than_or_equal(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        None
    }

    fn get_compare_less_than(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        None
    }

    fn get_compare_less_than_or_equal(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnImmediate> {
        None
    }

    fn get_compare_changed(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative> {
        let length = scan_constraint.get_compare_value().get_size_in_bytes() as usize;
        if length == 0 {
            return None;
        }
        Some(Box::new(move |current, previous| unsafe {
            std::slice::from_raw_parts(current, length) != std::slice::from_raw_parts(previous, length)
        }))
    }

    fn get_compare_unchanged(
        &self,
        scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative> {
        let changed = self.get_compare_changed(scan_constraint)?;
        Some(Box::new(move |current, previous| !changed(current, previous)))
    }

    fn get_compare_increased(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative> {
        None
    }

    fn get_compare_decreased(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnRelative> {
        None
    }

    fn get_compare_increased_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_decreased_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_multiplied_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_divided_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_modulo_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_shift_left_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_shift_right_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_logical_and_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_logical_or_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }

    fn get_compare_logical_xor_by(
        &self,
        _scan_constraint: &ScanConstraint,
    ) -> Option<ScalarCompareFnDelta> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::data_types::data_type_ref::DataTypeRef;
    use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use crate::structures::data_values::data_value::DataValue;
    use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};

    #[test]
    fn equal_matches_exact_byte_pattern() {
        let data_type = DataTypeAob;
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            DataValue::new(DataTypeRef::new(DataTypeAob::DATA_TYPE_ID), vec![0xE8, 0x03, 0x00, 0x00]),
            FloatingPointTolerance::default(),
        );

        let compare = data_type.get_compare_equal(&scan_constraint).unwrap();
        let matching = [0xE8u8, 0x03, 0x00, 0x00];
        let not_matching = [0xE8u8, 0x04, 0x00, 0x00];

        assert!(compare(matching.as_ptr()));
        assert!(!compare(not_matching.as_ptr()));
    }
}
