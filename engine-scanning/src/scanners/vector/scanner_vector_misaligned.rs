use crate::scanners::run_length_encoder::SnapshotRegionRunLengthEncoder;
use crate::scanners::snapshot_scanner::Scanner;
use memscan_api::structures::scanning::comparisons::scan_function_vector::VECTOR_LANES;
use memscan_api::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;
use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;

/// Vectorized scanner for the case where the data type size is a multiple of the scan alignment,
/// so a single vector load straddles more than one element's comparisons. Each alignment-sized
/// read offset within a vector is compared separately and folded into a per-slot bitmask: bit `k`
/// of a slot is set when the element starting `k * alignment` bytes into that slot passes.
///
/// `encode_results_vector` on its own can't tell us pass/fail per element, only per bit position
/// across the whole vector, so the final decode walks one flag byte per `element_size`-wide slot.
/// Every vectorized comparer fills an entire slot with the same byte (see the numeric data type
/// vector dispatch macros), so sampling the slot's first byte recovers its full bit pattern.
pub struct ScannerVectorMisaligned;

impl ScannerVectorMisaligned {
    fn scan_remainder_scalar(
        snapshot_filter_element_scan_plan: &SnapshotFilterElementScanPlan,
        run_length_encoder: &mut SnapshotRegionRunLengthEncoder,
        current_values_pointer: *const u8,
        previous_values_pointer: *const u8,
        start_offset: u64,
        region_size: u64,
        element_size: u64,
        alignment: u64,
    ) {
        let Some(compare) = snapshot_filter_element_scan_plan.build_scan_function_scalar() else {
            log::error!("no scalar scan function available for misaligned scan remainder");
            return;
        };

        let mut offset = start_offset;
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
    }
}

impl Scanner for ScannerVectorMisaligned {
    fn get_scanner_name(&self) -> &'static str {
        "Vector (Misaligned)"
    }

    fn scan_region(
        &self,
        snapshot_region: &SnapshotRegion,
        snapshot_filter_element_scan_plan: &SnapshotFilterElementScanPlan,
    ) -> Vec<SnapshotRegion> {
        let element_size = snapshot_filter_element_scan_plan.get_unit_size_in_bytes();
        let alignment = snapshot_filter_element_scan_plan.get_memory_alignment().value();
        debug_assert!(element_size > alignment);
        debug_assert_eq!(element_size % alignment, 0);

        let region_size = snapshot_region.get_region_size();
        let current_values_pointer = snapshot_region.get_current_values_ptr();
        let previous_values_pointer = snapshot_region.get_previous_values_ptr();

        let mut run_length_encoder = SnapshotRegionRunLengthEncoder::new(snapshot_region, element_size);

        let scans_per_vector = (element_size / alignment).max(1);
        let vector_size = VECTOR_LANES as u64;
        let vectorizable_iterations = region_size / vector_size;
        let all_pass_mask: u8 = if scans_per_vector >= 8 { 0xFF } else { (1u8 << scans_per_vector) - 1 };

        let Some(compare) = snapshot_filter_element_scan_plan.build_scan_function_vector() else {
            Self::scan_remainder_scalar(
                snapshot_filter_element_scan_plan,
                &mut run_length_encoder,
                current_values_pointer,
                previous_values_pointer,
                0,
                region_size,
                element_size,
                alignment,
            );
            return run_length_encoder.gather_collected_regions();
        };

        for vector_index in 0..vectorizable_iterations {
            let vector_offset = vector_index * vector_size;

            // Bit `k` of byte `b` in this accumulator means: the element whose first byte is
            // `b + k * alignment` bytes into this vector passed the comparison.
            let mut accumulator = [0u8; VECTOR_LANES];
            for read_offset in 0..scans_per_vector {
                let byte_offset = (vector_offset + read_offset * alignment) as usize;
                let current_pointer = unsafe { current_values_pointer.add(byte_offset) };
                let previous_pointer = unsafe { previous_values_pointer.add(byte_offset) };
                let compare_result = compare(current_pointer, previous_pointer);

                let bit = 1u8 << read_offset;
                for lane in 0..VECTOR_LANES {
                    if compare_result[lane] != 0 {
                        accumulator[lane] |= bit;
                    }
                }
            }

            // Fast path: every slot in this vector is either fully passing or fully failing.
            let all_pass = accumulator.iter().all(|&flags| flags == all_pass_mask);
            let all_fail = accumulator.iter().all(|&flags| flags == 0);

            if all_pass {
                run_length_encoder.encode_batch(vector_size);
                continue;
            }
            if all_fail {
                run_length_encoder.finalize_current_encode(vector_size);
                continue;
            }

            // Mixed result: walk one flag byte per element-sized slot and test each bit.
            let mut slot_offset = 0usize;
            while slot_offset < VECTOR_LANES {
                let flags = accumulator[slot_offset];
                for read_offset in 0..scans_per_vector {
                    let bit = 1u8 << read_offset;
                    if flags & bit != 0 {
                        run_length_encoder.encode_batch(alignment);
                    } else {
                        run_length_encoder.finalize_current_encode(alignment);
                    }
                }
                slot_offset += element_size as usize;
            }
        }

        Self::scan_remainder_scalar(
            snapshot_filter_element_scan_plan,
            &mut run_length_encoder,
            current_values_pointer,
            previous_values_pointer,
            vectorizable_iterations * vector_size,
            region_size,
            element_size,
            alignment,
        );

        run_length_encoder.gather_collected_regions()
    }
}
