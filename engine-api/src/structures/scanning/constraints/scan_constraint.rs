use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use crate::structures::data_values::data_value::DataValue;
use crate::structures::scanning::comparisons::scan_compare_type::ScanCompareType;

/// A single typed leaf predicate: a compare kind plus, for `Immediate` and `Delta` kinds, the
/// bound literal it compares against. `Relative` kinds (`Changed`, `Unchanged`, `Increased`,
/// `Decreased`) carry no literal -- the current and previous bytes are compared to each other.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanConstraint {
    compare_type: ScanCompareType,
    compare_value: DataValue,
    floating_point_tolerance: FloatingPointTolerance,
}

impl ScanConstraint {
    pub fn new(
        compare_type: ScanCompareType,
        compare_value: DataValue,
        floating_point_tolerance: FloatingPointTolerance,
    ) -> Self {
        Self {
            compare_type,
            compare_value,
            floating_point_tolerance,
        }
    }

    pub fn get_compare_type(&self) -> &ScanCompareType {
        &self.compare_type
    }

    pub fn get_compare_value(&self) -> &DataValue {
        &self.compare_value
    }

    pub fn get_floating_point_tolerance(&self) -> FloatingPointTolerance {
        self.floating_point_tolerance
    }

    pub fn is_relative(&self) -> bool {
        self.compare_type.is_relative()
    }
}
