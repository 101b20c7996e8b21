use crate::scanners::run_length_encoder::SnapshotRegionRunLengthEncoder;
use crate::scanners::snapshot_scanner::Scanner;
use memscan_api::structures::scanning::comparisons::scan_function_vector::{ScanVector, VECTOR_LANES};
use memscan_api::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;
use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;
use std::simd::cmp::SimdPartialEq;
use std::simd::Simd;

/// Vectorized scanner for the case where the data type size exactly matches the scan alignment,
/// i.e. every lane of a loaded vector is the first byte of some element. One compare fills in the
/// whole pass/fail mask for `VECTOR_LANES` elements at a time.
pub struct ScannerVectorAligned;

impl ScannerVectorAligned {
    fn encode_results(
        compare_result: &ScanVector,
        run_length_encoder: &mut SnapshotRegionRunLengthEncoder,
        alignment: u64,
        true_mask: ScanVector,
        false_mask: ScanVector,
    ) {
        // Common case: a full vector of identical bytes, so skip the lane-by-lane walk entirely.
        if compare_result.simd_eq(true_mask).all() {
            run_length_encoder.encode_batch(VECTOR_LANES as u64);
        } else if compare_result.simd_eq(false_mask).all() {
            run_length_encoder.finalize_current_encode(VECTOR_LANES as u64);
        } else {
            Self::encode_remainder_results(compare_result, run_length_encoder, alignment, VECTOR_LANES);
        }
    }

    fn encode_remainder_results(
        compare_result: &ScanVector,
        run_length_encoder: &mut SnapshotRegionRunLengthEncoder,
        alignment: u64,
        span: usize,
    ) {
        let start_byte_index = VECTOR_LANES - span;
        for byte_index in (start_byte_index..VECTOR_LANES).step_by(alignment as usize) {
            if compare_result[byte_index] != 0 {
                run_length_encoder.encode_batch(alignment);
            } else {
                run_length_encoder.finalize_current_encode(alignment);
            }
        }
    }
}

impl Scanner for ScannerVectorAligned {
    fn get_scanner_name(&self) -> &'static str {
        "Vector (Aligned)"
    }

    /// Sequential left-to-right pass over the region, folding each vector's worth of compare
    /// results into the run-length encoder as it goes.
    fn scan_region(
        &self,
        snapshot_region: &SnapshotRegion,
        snapshot_filter_element_scan_plan: &SnapshotFilterElementScanPlan,
    ) -> Vec<SnapshotRegion> {
        let element_size = snapshot_filter_element_scan_plan.get_unit_size_in_bytes();
        let alignment = snapshot_filter_element_scan_plan.get_memory_alignment().value();
        debug_assert_eq!(element_size, alignment);

        let region_size = snapshot_region.get_region_size();
        let current_values_pointer = snapshot_region.get_current_values_ptr();
        let previous_values_pointer = snapshot_region.get_previous_values_ptr();

        let mut run_length_encoder = SnapshotRegionRunLengthEncoder::new(snapshot_region, element_size);

        let vector_size = VECTOR_LANES as u64;
        let vectorizable_iterations = region_size / vector_size;
        let remainder_bytes = region_size - vectorizable_iterations * vector_size;

        let true_mask = Simd::<u8, VECTOR_LANES>::splat(0xFF);
        let false_mask = Simd::<u8, VECTOR_LANES>::splat(0x00);

        if vectorizable_iterations > 0 {
            if let Some(compare) = snapshot_filter_element_scan_plan.build_scan_function_vector() {
                for index in 0..vectorizable_iterations {
                    let offset = (index * vector_size) as usize;
                    let current_pointer = unsafe { current_values_pointer.add(offset) };
                    let previous_pointer = unsafe { previous_values_pointer.add(offset) };
                    let compare_result = compare(current_pointer, previous_pointer);

                    Self::encode_results(&compare_result, &mut run_length_encoder, alignment, true_mask, false_mask);
                }

                if remainder_bytes > 0 {
                    let offset = (vectorizable_iterations * vector_size) as usize;
                    let current_pointer = unsafe { current_values_pointer.add(offset) };
                    let previous_pointer = unsafe { previous_values_pointer.add(offset) };
                    let compare_result = compare(current_pointer, previous_pointer);

                    Self::encode_remainder_results(&compare_result, &mut run_length_encoder, alignment, remainder_bytes as usize);
                }

                return run_length_encoder.gather_collected_regions();
            }
        }

        // Region smaller than one vector, or the constraint tree has no vector comparer at all.
        if let Some(compare) = snapshot_filter_element_scan_plan.build_scan_function_scalar() {
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
        } else {
            log::error!("no scalar scan function available for aligned scan fallback");
        }

        run_length_encoder.gather_collected_regions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memscan_api::structures::data_types::built_in_types::i32::DataTypeI32;
    use memscan_api::structures::data_types::built_in_types::u64::DataTypeU64;
    use memscan_api::structures::data_types::data_type_ref::DataTypeRef;
    use memscan_api::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use memscan_api::structures::data_values::data_value::DataValue;
    use memscan_api::structures::memory::memory_alignment::MemoryAlignment;
    use memscan_api::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeImmediate};
    use memscan_api::structures::scanning::constraints::constraint_node::ConstraintNode;
    use memscan_api::structures::scanning::constraints::constraint_node_finalized::ConstraintNodeFinalized;
    use memscan_api::structures::scanning::constraints::scan_constraint::ScanConstraint;
    use memscan_api::structures::snapshots::read_group::ReadGroup;
    use std::sync::Arc;

    fn make_region(bytes: &[u8]) -> SnapshotRegion {
        let read_group = ReadGroup::new(0x2000, bytes.len());
        let owned = bytes.to_vec();
        read_group
            .read_all(move |_, size, out| {
                out[..size].copy_from_slice(&owned);
                Ok(size)
            })
            .unwrap();
        SnapshotRegion::new(Arc::new(read_group), 0, bytes.len())
    }

    #[test]
    fn aligned_vector_scan_small_region_does_not_overread() {
        let region_size = 12usize;
        let region = make_region(&vec![0u8; region_size]);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 0i32.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let tree = ConstraintNodeFinalized::new(ConstraintNode::leaf(scan_constraint)).unwrap();
        let plan = SnapshotFilterElementScanPlan::new(&tree, MemoryAlignment::Alignment4, FloatingPointTolerance::default());

        let results = ScannerVectorAligned.scan_region(&region, &plan);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get_base_address(), 0x2000);
        assert_eq!(results[0].get_region_size(), region_size as u64);
    }

    #[test]
    fn aligned_vector_scan_ignores_trailing_bytes_without_full_element() {
        let region_size = 20usize;
        let region = make_region(&vec![0u8; region_size]);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeU64::DATA_TYPE_ID), 0u64.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let tree = ConstraintNodeFinalized::new(ConstraintNode::leaf(scan_constraint)).unwrap();
        let plan = SnapshotFilterElementScanPlan::new(&tree, MemoryAlignment::Alignment8, FloatingPointTolerance::default());

        let results = ScannerVectorAligned.scan_region(&region, &plan);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].get_base_address(), 0x2000);
        assert_eq!(results[0].get_region_size(), 16);
    }

    #[test]
    fn aligned_vector_scan_beyond_one_vector_coalesces_matching_runs() {
        let mut bytes = Vec::new();
        for value in 0..40i32 {
            let matches = value % 3 == 0;
            bytes.extend_from_slice(&(if matches { 7i32 } else { value }).to_le_bytes());
        }
        let region = make_region(&bytes);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 7i32.to_le_bytes().to_vec());
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Immediate(ScanCompareTypeImmediate::Equal),
            data_value,
            FloatingPointTolerance::default(),
        );
        let tree = ConstraintNodeFinalized::new(ConstraintNode::leaf(scan_constraint)).unwrap();
        let plan = SnapshotFilterElementScanPlan::new(&tree, MemoryAlignment::Alignment4, FloatingPointTolerance::default());

        let results = ScannerVectorAligned.scan_region(&region, &plan);

        assert!(!results.is_empty());
        for result in &results {
            let local_element_index = (result.get_base_address() - 0x2000) / 4;
            assert_eq!(local_element_index % 3, 0);
        }
    }
}
