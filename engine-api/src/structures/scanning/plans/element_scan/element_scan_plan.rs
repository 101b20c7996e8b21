use crate::structures::data_types::data_type::DataType;
use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::data_type_ref::DataTypeRef;
use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use crate::structures::memory::memory_alignment::MemoryAlignment;
use crate::structures::scanning::constraints::constraint_node::ConstraintNode;
use crate::structures::scanning::constraints::constraint_node_finalized::ConstraintNodeFinalized;
use crate::structures::scanning::memory_read_mode::MemoryReadMode;
use crate::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;

/// The scan driver's top-level, already-resolved scan request: one finalized constraint tree
/// root, the alignment to scan at (already resolved from `Auto`), and the driver-level knobs that
/// are not the scanner's concern (read mode, single-thread override).
pub struct ElementScanPlan {
    constraint_tree: ConstraintNodeFinalized,
    memory_alignment: MemoryAlignment,
    memory_read_mode: MemoryReadMode,
    is_single_thread_scan: bool,
    floating_point_tolerance: FloatingPointTolerance,
}

impl ElementScanPlan {
    /// `memory_alignment` of `None` resolves to `MemoryAlignment::resolve_auto`'s rule: the
    /// byte-array type always scans at alignment 1, every other type at `min(unit size, 8)`.
    pub fn new(
        constraint_node: ConstraintNode,
        memory_alignment: Option<MemoryAlignment>,
        memory_read_mode: MemoryReadMode,
        is_single_thread_scan: bool,
        floating_point_tolerance: FloatingPointTolerance,
    ) -> Result<Self, DataTypeError> {
        let constraint_tree = ConstraintNodeFinalized::new(constraint_node)?;
        let data_type = constraint_tree.first_data_type();
        let memory_alignment = MemoryAlignment::resolve_auto(memory_alignment, data_type.get_unit_size_in_bytes(), data_type.is_byte_array());

        Ok(Self {
            constraint_tree,
            memory_alignment,
            memory_read_mode,
            is_single_thread_scan,
            floating_point_tolerance,
        })
    }

    pub fn get_constraint_tree(&self) -> &ConstraintNodeFinalized {
        &self.constraint_tree
    }

    pub fn get_memory_alignment(&self) -> MemoryAlignment {
        self.memory_alignment
    }

    pub fn get_memory_read_mode(&self) -> MemoryReadMode {
        self.memory_read_mode
    }

    pub fn get_is_single_thread_scan(&self) -> bool {
        self.is_single_thread_scan
    }

    pub fn get_is_relative(&self) -> bool {
        self.constraint_tree.is_relative()
    }

    pub fn get_is_supported(&self) -> bool {
        self.constraint_tree.is_supported()
    }

    pub fn get_data_type_ref(&self) -> DataTypeRef {
        DataTypeRef::new(self.constraint_tree.first_data_type().get_data_type_id())
    }

    pub fn get_unit_size_in_bytes(&self) -> u64 {
        self.constraint_tree.first_data_type().get_unit_size_in_bytes()
    }

    /// Builds the narrower, borrow-scoped plan the vector scanner consumes for one region.
    pub fn build_filter_plan(&self) -> SnapshotFilterElementScanPlan<'_> {
        SnapshotFilterElementScanPlan::new(&self.constraint_tree, self.memory_alignment, self.floating_point_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::data_types::built_in_types::i32::DataTypeI32;
    use crate::structures::data_types::data_type_ref::DataTypeRef;
    use crate::structures::data_values::data_value::DataValue;
    use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};
    use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

    #[test]
    fn filter_plan_borrows_the_same_finalized_constraint_tree() {
        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 1000i32.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let plan = ElementScanPlan::new(
            ConstraintNode::leaf(scan_constraint),
            Some(MemoryAlignment::Alignment4),
            MemoryReadMode::ReadInterleavedWithScan,
            false,
            FloatingPointTolerance::default(),
        )
        .unwrap();

        assert!(plan.get_is_supported());
        let filter_plan = plan.build_filter_plan();
        assert_eq!(filter_plan.get_unit_size_in_bytes(), 4);
        assert!(filter_plan.build_scan_function_scalar().is_some());
    }

    #[test]
    fn auto_alignment_resolves_to_the_data_types_unit_size() {
        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 1000i32.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let plan = ElementScanPlan::new(
            ConstraintNode::leaf(scan_constraint),
            None,
            MemoryReadMode::ReadInterleavedWithScan,
            false,
            FloatingPointTolerance::default(),
        )
        .unwrap();

        assert_eq!(plan.get_memory_alignment(), MemoryAlignment::Alignment4);
    }

    #[test]
    fn unknown_data_type_id_is_rejected_rather_than_panicking() {
        let data_value = DataValue::new(DataTypeRef::new("not_a_real_type"), vec![0u8; 4]);
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );

        let result = ElementScanPlan::new(
            ConstraintNode::leaf(scan_constraint),
            None,
            MemoryReadMode::ReadInterleavedWithScan,
            false,
            FloatingPointTolerance::default(),
        );

        assert!(result.is_err());
    }
}
