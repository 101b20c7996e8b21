use crate::scanners::run_length_encoder::SnapshotRegionRunLengthEncoder;
use crate::scanners::snapshot_scanner::Scanner;
use memscan_api::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;
use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;

/// Element-by-element fallback comparer. Used for regions smaller than one vector load and for
/// constraint trees with no vector comparer at all (e.g. a byte-array leaf). Produces the same
/// survivor regions a vectorized pass would, just without the SIMD loads.
pub struct ScannerScalarIterative;

impl Scanner for ScannerScalarIterative {
    fn get_scanner_name(&self) -> &'static str {
        "Scalar (Iterative)"
    }

    fn scan_region(
        &self,
        snapshot_region: &SnapshotRegion,
        snapshot_filter_element_scan_plan: &SnapshotFilterElementScanPlan,
    ) -> Vec<SnapshotRegion> {
        let element_size = snapshot_filter_element_scan_plan.get_unit_size_in_bytes();
        let mut run_length_encoder = SnapshotRegionRunLengthEncoder::new(snapshot_region, element_size);

        let Some(compare) = snapshot_filter_element_scan_plan.build_scan_function_scalar() else {
            log::error!("no scalar scan function available for scalar fallback scan");
            return run_length_encoder.gather_collected_regions();
        };

        let alignment = snapshot_filter_element_scan_plan.get_memory_alignment().value();
        let region_size = snapshot_region.get_region_size();
        let current_values_pointer = snapshot_region.get_current_values_ptr();
        let previous_values_pointer = snapshot_region.get_previous_values_ptr();

        let mut offset = 0u64;
        while offset + element_size <= region_size {
            let current_pointer = unsafe { current_values_pointer.add(offset as usize) };
            let previous_pointer = unsafe { previous_values_pointer.add(offset as usize) };

            if compare(current_pointer, previous_pointer) {
                run_length_encoder.encode_batch(alignment);
            } else {
                run_length_encoder.finalize_current_encode(alignment);
            }

            offset += alignment;
        }

        run_length_encoder.gather_collected_regions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memscan_api::structures::data_types::built_in_types::i32::DataTypeI32;
    use memscan_api::structures::data_types::data_type_ref::DataTypeRef;
    use memscan_api::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use memscan_api::structures::data_values::data_value::DataValue;
    use memscan_api::structures::memory::memory_alignment::MemoryAlignment;
    use memscan_api::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};
    use memscan_api::structures::scanning::constraints::constraint_node::ConstraintNode;
    use memscan_api::structures::scanning::constraints::constraint_node_finalized::ConstraintNodeFinalized;
    use memscan_api::structures::scanning::constraints::scan_constraint::ScanConstraint;
    use memscan_api::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;
    use memscan_api::structures::snapshots::read_group::ReadGroup;
    use std::sync::Arc;

    fn make_region(bytes: &[u8]) -> SnapshotRegion {
        let read_group = ReadGroup::new(0x1000, bytes.len());
        let owned = bytes.to_vec();
        read_group.read_all(move |_, size, out| {
            out[..size].copy_from_slice(&owned);
            Ok(size)
        }).unwrap();
        SnapshotRegion::new(Arc::new(read_group), 0, bytes.len())
    }

    #[test]
    fn scenario_a_exact_value_filter_matches_two_of_four_elements() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&1i32.to_le_bytes());
        let region = make_region(&bytes);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 1000i32.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let tree = ConstraintNodeFinalized::new(ConstraintNode::leaf(scan_constraint)).unwrap();
        let plan = SnapshotFilterElementScanPlan::new(&tree, MemoryAlignment::Alignment4, FloatingPointTolerance::default());

        let results = ScannerScalarIterative.scan_region(&region, &plan);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].get_base_address(), 0x1004);
        assert_eq!(results[1].get_base_address(), 0x1008);
    }
}
