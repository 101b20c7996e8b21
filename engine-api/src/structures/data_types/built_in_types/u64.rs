use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeU64, "u64", "u64", u64, Endian::Little, from_le_bytes, to_le_bytes, false, 4);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable;
    use crate::structures::data_types::data_type_ref::DataTypeRef;
    use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use crate::structures::data_values::data_value::DataValue;
    use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta};
    use crate::structures::scanning::comparisons::scan_function_scalar::ScanFunctionScalar;
    use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

    #[test]
    fn increased_by_matches_wrapping_addition() {
        let data_type = DataTypeU64;
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Delta(ScanCompareTypeDelta::IncreasedBy),
            DataValue::new(DataTypeRef::new(DataTypeU64::DATA_TYPE_ID), 5u64.to_le_bytes().to_vec()),
            FloatingPointTolerance::default(),
        );

        let ScanFunctionScalar::RelativeOrDelta(compare) = data_type.build_scalar_compare_fn(&scan_constraint).unwrap() else {
            panic!("expected relative-or-delta compare fn");
        };

        let previous = 10u64.to_le_bytes();
        let current = 15u64.to_le_bytes();
        let wrong = 16u64.to_le_bytes();

        assert!(compare(current.as_ptr(), previous.as_ptr()));
        assert!(!compare(wrong.as_ptr(), previous.as_ptr()));
    }
}
