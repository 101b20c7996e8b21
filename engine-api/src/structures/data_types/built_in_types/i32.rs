use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeI32, "i32", "i32", i32, Endian::Little, from_le_bytes, to_le_bytes, true, 8);

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
    fn scenario_a_exact_value_filter_matches_two_of_four_elements() {
        let data_type = DataTypeI32;
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 1000i32.to_le_bytes().to_vec()),
            FloatingPointTolerance::default(),
        );

        let ScanFunctionScalar::Immediate(compare) = data_type.build_scalar_compare_fn(&scan_constraint).unwrap() else {
            panic!("expected immediate compare fn");
        };

        let bytes: Vec<u8> = [0i32, 1000, 1000, 1].into_iter().flat_map(|value| value.to_le_bytes()).collect();
        let matches: Vec<bool> = (0..4).map(|index| compare(unsafe { bytes.as_ptr().add(index * 4) })).collect();

        assert_eq!(matches, vec![false, true, true, false]);
    }
}
