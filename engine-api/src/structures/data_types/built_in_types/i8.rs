use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeI8, "i8", "i8", i8, Endian::Little, from_le_bytes, to_le_bytes, true, 32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable;
    use crate::structures::data_types::data_type_ref::DataTypeRef;
    use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use crate::structures::data_values::data_value::DataValue;
    use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};
    use crate::structures::scanning::comparisons::scan_function_scalar::ScanFunctionScalar;
    use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

    #[test]
    fn equal_matches_exact_value() {
        let data_type = DataTypeI8;
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            DataValue::new(DataTypeRef::new(DataTypeI8::DATA_TYPE_ID), vec![5i8 as u8]),
            FloatingPointTolerance::default(),
        );

        let ScanFunctionScalar::Immediate(compare) = data_type.build_scalar_compare_fn(&scan_constraint).unwrap() else {
            panic!("expected immediate compare fn");
        };

        let matching = 5i8.to_le_bytes();
        let not_matching = 6i8.to_le_bytes();
        assert!(compare(matching.as_ptr()));
        assert!(!compare(not_matching.as_ptr()));
    }
}
