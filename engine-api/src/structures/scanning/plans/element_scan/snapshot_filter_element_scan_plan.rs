use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use crate::structures::memory::memory_alignment::MemoryAlignment;
use crate::structures::scanning::constraints::constraint_node_finalized::{CompiledScalarFn, CompiledVectorFn, ConstraintNodeFinalized};

/// The per-region scan plan the vector scanner actually consumes: a finalized constraint tree
/// (with every leaf's compiled comparer already built) paired with the resolved alignment to
/// scan at. Built once per scan, borrowed by every region the scan driver dispatches to a worker.
pub struct SnapshotFilterElementScanPlan<'a> {
    constraint_tree: &'a ConstraintNodeFinalized,
    memory_alignment: MemoryAlignment,
    floating_point_tolerance: FloatingPointTolerance,
}

impl<'a> SnapshotFilterElementScanPlan<'a> {
    pub fn new(
        constraint_tree: &'a ConstraintNodeFinalized,
        memory_alignment: MemoryAlignment,
        floating_point_tolerance: FloatingPointTolerance,
    ) -> Self {
        Self {
            constraint_tree,
            memory_alignment,
            floating_point_tolerance,
        }
    }

    pub fn get_unit_size_in_bytes(&self) -> u64 {
        self.constraint_tree.first_data_type().get_unit_size_in_bytes()
    }

    pub fn get_memory_alignment(&self) -> MemoryAlignment {
        self.memory_alignment
    }

    pub fn get_floating_point_tolerance(&self) -> FloatingPointTolerance {
        self.floating_point_tolerance
    }

    pub fn build_scan_function_vector(&self) -> Option<CompiledVectorFn<'a>> {
        self.constraint_tree.build_vector_compare_fn()
    }

    pub fn build_scan_function_scalar(&self) -> Option<CompiledScalarFn<'a>> {
        self.constraint_tree.build_scalar_compare_fn()
    }

    pub fn is_relative(&self) -> bool {
        self.constraint_tree.is_relative()
    }
}
