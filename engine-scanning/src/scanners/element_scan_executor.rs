use crate::scan_settings_config::ScanSettingsConfig;
use crate::scanners::scanner_scalar_iterative::ScannerScalarIterative;
use crate::scanners::snapshot_scanner::Scanner;
use crate::scanners::vector::scanner_vector_aligned::ScannerVectorAligned;
use crate::scanners::vector::scanner_vector_misaligned::ScannerVectorMisaligned;
use crate::ScanError;
use memscan_api::errors::read_error::ReadError;
use memscan_api::structures::scanning::comparisons::scan_function_vector::VECTOR_LANES;
use memscan_api::structures::scanning::plans::element_scan::element_scan_plan::ElementScanPlan;
use memscan_api::structures::snapshots::read_group::ReadGroup;
use memscan_api::structures::snapshots::snapshot::Snapshot;
use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;
use memscan_api::structures::tasks::trackable_task::TrackableTask;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

const TASK_NAME: &str = "Element Scan";
const OUTPUT_SNAPSHOT_NAME: &str = "Manual Scan";

/// Drives one constraint-filtering pass over a snapshot: reads every distinct `ReadGroup`
/// exactly once, dispatches each region to the scanner best suited to its size and the scan's
/// alignment-vs-element-size relationship, and assembles the survivors into a fresh `Snapshot`.
///
/// Mirrors the split the teacher keeps between a value-collection task and an element-scan task,
/// except here both phases live in one driver because a `ReadGroup` shared by several regions
/// must be read exactly once regardless of which region triggers it.
pub struct ElementScanExecutor;

impl ElementScanExecutor {
    /// Spawns the scan on a background thread and returns a handle to observe progress or
    /// request cancellation, plus a slot the final `Result` is deposited into once the task
    /// completes.
    pub fn start_task<F>(
        input_snapshot: Snapshot,
        element_scan_plan: ElementScanPlan,
        reader: F,
        with_logging: bool,
    ) -> (Arc<TrackableTask>, Arc<Mutex<Option<Result<Snapshot, ScanError>>>>)
    where
        F: Fn(u64, usize, &mut [u8]) -> Result<usize, ReadError> + Send + Sync + 'static,
    {
        let task = TrackableTask::create(TASK_NAME.to_string(), None);
        let task_clone = task.clone();
        let result_slot = Arc::new(Mutex::new(None));
        let result_slot_clone = result_slot.clone();

        thread::spawn(move || {
            let result = Self::execute_scan(&input_snapshot, &element_scan_plan, reader, &task_clone, with_logging);

            if let Ok(result_slot) = result_slot_clone.lock().as_mut() {
                **result_slot = Some(result);
            }

            task_clone.complete();
        });

        (task, result_slot)
    }

    /// Synchronous core of the scan: the nine-step process of validation, deduplicated reads,
    /// per-region vectorized scanning, and survivor assembly. Exposed directly so it can be unit
    /// tested without spawning a thread.
    pub fn execute_scan<F>(
        input_snapshot: &Snapshot,
        element_scan_plan: &ElementScanPlan,
        reader: F,
        trackable_task: &Arc<TrackableTask>,
        with_logging: bool,
    ) -> Result<Snapshot, ScanError>
    where
        F: Fn(u64, usize, &mut [u8]) -> Result<usize, ReadError> + Sync,
    {
        let total_start_time = Instant::now();

        if input_snapshot.get_region_count() == 0 {
            return Err(ScanError::InvalidArguments("input snapshot contains no regions".to_string()));
        }
        if !element_scan_plan.get_constraint_tree().has_uniform_relativity() {
            return Err(ScanError::InvalidArguments("constraint tree mixes relative/delta leaves with immediate leaves".to_string()));
        }
        if !element_scan_plan.get_is_supported() {
            return Err(ScanError::UnsupportedType(format!(
                "constraint tree is not supported against data type {}",
                element_scan_plan.get_data_type_ref().get_data_type_id()
            )));
        }
        if trackable_task.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let element_size = element_scan_plan.get_unit_size_in_bytes();
        let alignment = element_scan_plan.get_memory_alignment();
        let alignment_value = alignment.value();
        let filter_plan = element_scan_plan.build_filter_plan();
        let has_vector_support = filter_plan.build_scan_function_vector().is_some();
        let is_relative = filter_plan.is_relative();

        // Step 3: read every distinct ReadGroup exactly once, even when several regions share one.
        let mut unique_groups: HashMap<usize, Arc<ReadGroup>> = HashMap::new();
        for region in input_snapshot.get_snapshot_regions() {
            let group = region.get_read_group();
            unique_groups.entry(Arc::as_ptr(group) as usize).or_insert_with(|| Arc::clone(group));
        }
        let groups: Vec<Arc<ReadGroup>> = unique_groups.into_values().collect();

        let read_start_time = Instant::now();
        groups.par_iter().try_for_each(|group| -> Result<(), ScanError> {
            if trackable_task.is_cancelled() {
                return Err(ScanError::Cancelled);
            }

            match group.read_all(|base_address, size, out| reader(base_address, size, out)) {
                Ok(()) => Ok(()),
                // A short read just leaves the group ineligible for relative comparisons this pass.
                Err(ReadError::ShortRead { .. }) => Ok(()),
                Err(fatal) => Err(ScanError::ReadFailed(fatal)),
            }
        })?;

        for group in &groups {
            group.resize_for_safe_reading(VECTOR_LANES);
        }

        if with_logging {
            log::info!("Read {} distinct memory regions in {:?}", groups.len(), read_start_time.elapsed());
        }

        if trackable_task.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        // Step 5: scan regions, largest first, for better worker balance under rayon's scheduler.
        let scan_start_time = Instant::now();
        let mut region_refs: Vec<&SnapshotRegion> = input_snapshot.get_snapshot_regions().iter().collect();
        region_refs.sort_by(|a, b| b.get_region_size().cmp(&a.get_region_size()));

        let total_regions = region_refs.len() as u64;
        let progress_interval = (total_regions / 100).max(1);
        let processed_count = AtomicU64::new(0);
        let was_cancelled = AtomicBool::new(false);
        let pause_while_scanning = ScanSettingsConfig::get_pause_while_scanning();

        let process_region = |region: &&SnapshotRegion| -> Vec<SnapshotRegion> {
            if trackable_task.is_cancelled() {
                was_cancelled.store(true, Ordering::SeqCst);
                return Vec::new();
            }

            let survivors = if is_relative && !region.can_compare() {
                Vec::new()
            } else {
                let scanner = Self::select_scanner(region.get_region_size(), element_size, alignment_value, has_vector_support);
                scanner.scan_region(region, &filter_plan)
            };

            let processed = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            if processed % progress_interval == 0 {
                trackable_task.set_progress((processed as f32 / total_regions as f32) * 100.0);
            }

            if pause_while_scanning {
                thread::sleep(Duration::from_millis(1));
            }

            survivors
        };

        let single_thread_scan = element_scan_plan.get_is_single_thread_scan() || region_refs.len() == 1;
        let survivor_batches: Vec<Vec<SnapshotRegion>> = if single_thread_scan {
            region_refs.iter().map(process_region).collect()
        } else {
            region_refs.par_iter().map(process_region).collect()
        };

        if was_cancelled.load(Ordering::SeqCst) || trackable_task.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        // Steps 6-7: concatenate survivors and let `Snapshot::new` sort and recompute aggregates.
        let merged_regions: Vec<SnapshotRegion> = survivor_batches.into_iter().flatten().collect();
        let result_count = merged_regions.len();
        let output_snapshot = Snapshot::new(OUTPUT_SNAPSHOT_NAME.to_string(), merged_regions, alignment, element_size);

        trackable_task.set_progress(100.0);

        if with_logging {
            log::info!("Scanned {} regions in {:?}", total_regions, scan_start_time.elapsed());
            log::info!("Survivors: {} regions, {} bytes", result_count, output_snapshot.get_byte_count());
            log::info!("Total scan time: {:?}", total_start_time.elapsed());

            if result_count == 0 {
                log::warn!("Scan produced 0 surviving regions.");
            }
        }

        Ok(output_snapshot)
    }

    fn select_scanner(
        region_size: u64,
        element_size: u64,
        alignment_value: u64,
        has_vector_support: bool,
    ) -> &'static dyn Scanner {
        const SCALAR: ScannerScalarIterative = ScannerScalarIterative;
        const ALIGNED: ScannerVectorAligned = ScannerVectorAligned;
        const MISALIGNED: ScannerVectorMisaligned = ScannerVectorMisaligned;

        if !has_vector_support || region_size < VECTOR_LANES as u64 {
            &SCALAR
        } else if element_size == alignment_value {
            &ALIGNED
        } else {
            &MISALIGNED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memscan_api::structures::data_types::built_in_types::aob::data_type_aob::DataTypeAob;
    use memscan_api::structures::data_types::built_in_types::i32::DataTypeI32;
    use memscan_api::structures::data_types::data_type_ref::DataTypeRef;
    use memscan_api::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
    use memscan_api::structures::data_values::data_value::DataValue;
    use memscan_api::structures::memory::memory_alignment::MemoryAlignment;
    use memscan_api::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta, ScanCompareTypeImmediate};
    use memscan_api::structures::scanning::constraints::constraint_node::ConstraintNode;
    use memscan_api::structures::scanning::constraints::scan_constraint::ScanConstraint;
    use memscan_api::structures::scanning::memory_read_mode::MemoryReadMode;

    fn make_snapshot(base_address: u64, bytes: Vec<u8>) -> Snapshot {
        let region_size = bytes.len();
        let read_group = ReadGroup::new(base_address, region_size);
        read_group
            .read_all(move |_, size, out| {
                out[..size].copy_from_slice(&bytes);
                Ok(size)
            })
            .unwrap();
        let region = SnapshotRegion::new(Arc::new(read_group), 0, region_size);
        Snapshot::new("input".to_string(), vec![region], MemoryAlignment::Alignment4, 4)
    }

    #[test]
    fn scenario_a_exact_value_filter_survives_two_matches() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&1i32.to_le_bytes());
        let input = make_snapshot(0x1000, bytes);

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

        let task = TrackableTask::create("test".to_string(), None);
        let output = ElementScanExecutor::execute_scan(
            &input,
            &plan,
            |_, size, out| {
                out[..size].fill(0);
                Ok(size)
            },
            &task,
            false,
        )
        .unwrap();

        assert_eq!(output.get_element_count(), 2);
        assert_eq!(output.get_snapshot_regions()[0].get_base_address(), 0x1004);
        assert_eq!(output.get_snapshot_regions()[1].get_base_address(), 0x1008);
    }

    #[test]
    fn scenario_f_unsupported_type_is_rejected_before_any_reading() {
        let input = make_snapshot(0x1000, vec![0u8; 16]);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeAob::DATA_TYPE_ID), vec![1u8]);
        let scan_constraint = ScanConstraint::new(
            ScanCompareType::Delta(ScanCompareTypeDelta::IncreasedBy),
            data_value,
            FloatingPointTolerance::default(),
        );
        let plan = ElementScanPlan::new(
            ConstraintNode::leaf(scan_constraint),
            Some(MemoryAlignment::Alignment1),
            MemoryReadMode::ReadInterleavedWithScan,
            false,
            FloatingPointTolerance::default(),
        )
        .unwrap();

        assert!(!plan.get_is_supported());

        let task = TrackableTask::create("test".to_string(), None);
        let result = ElementScanExecutor::execute_scan(
            &input,
            &plan,
            |_, _, _| panic!("reader must not be invoked for an unsupported constraint"),
            &task,
            false,
        );

        assert!(matches!(result, Err(ScanError::UnsupportedType(_))));
    }

    #[test]
    fn cancellation_before_scan_returns_cancelled_with_no_output() {
        let input = make_snapshot(0x1000, vec![0u8; 16]);

        let data_value = DataValue::new(DataTypeRef::new(DataTypeI32::DATA_TYPE_ID), 0i32.to_le_bytes().to_vec());
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

        let task = TrackableTask::create("test".to_string(), None);
        task.cancel();

        let result = ElementScanExecutor::execute_scan(&input, &plan, |_, size, out| Ok({ out[..size].fill(0); size }), &task, false);

        assert!(matches!(result, Err(ScanError::Cancelled)));
    }
}
