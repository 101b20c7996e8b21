use crate::structures::memory::memory_alignment::MemoryAlignment;
use crate::structures::snapshots::read_group::ReadGroup;
use std::sync::Arc;

/// A candidate slice of one `ReadGroup` that has survived all prior filters. This is the unit
/// the vector scanner consumes and produces: one parent `SnapshotRegion` goes in, zero or more
/// narrower `SnapshotRegion`s come out.
pub struct SnapshotRegion {
    read_group: Arc<ReadGroup>,
    offset_in_group: usize,
    region_size: usize,
    base_element_index: u64,
}

impl SnapshotRegion {
    pub fn new(
        read_group: Arc<ReadGroup>,
        offset_in_group: usize,
        region_size: usize,
    ) -> Self {
        Self {
            read_group,
            offset_in_group,
            region_size,
            base_element_index: 0,
        }
    }

    pub fn get_read_group(&self) -> &Arc<ReadGroup> {
        &self.read_group
    }

    pub fn get_offset_in_group(&self) -> usize {
        self.offset_in_group
    }

    pub fn get_base_address(&self) -> u64 {
        self.read_group.get_base_address() + self.offset_in_group as u64
    }

    pub fn get_region_size(&self) -> u64 {
        self.region_size as u64
    }

    pub fn get_base_element_index(&self) -> u64 {
        self.base_element_index
    }

    pub fn set_base_element_index(
        &mut self,
        base_element_index: u64,
    ) {
        self.base_element_index = base_element_index;
    }

    /// Element count at the given data type size and alignment, clamped at zero. Matches the
    /// naive "step by alignment and check the element still fits" count exactly.
    pub fn get_element_count(
        &self,
        data_type_size_in_bytes: u64,
        alignment: MemoryAlignment,
    ) -> u64 {
        let alignment_value = alignment.value();
        let region_size = self.region_size as u64;

        if data_type_size_in_bytes == 0 || region_size < data_type_size_in_bytes {
            return 0;
        }

        (region_size - data_type_size_in_bytes + alignment_value) / alignment_value
    }

    /// True if this region is misaligned relative to its enclosing `ReadGroup`, i.e. the region's
    /// starting offset does not already land on an `alignment`-aligned boundary.
    pub fn is_misaligned_within_group(
        &self,
        alignment: MemoryAlignment,
    ) -> bool {
        self.offset_in_group as u64 % alignment.value() != 0
    }

    pub fn can_compare(&self) -> bool {
        self.read_group.can_compare()
    }

    /// A narrower region carved out of this one, sharing the same `ReadGroup`. `local_offset` is
    /// relative to this region's own start, not the group's. Used by the scanner to turn a run of
    /// passing bytes into a standalone survivor without copying any buffer data.
    pub fn sub_region(
        &self,
        local_offset: usize,
        region_size: usize,
    ) -> SnapshotRegion {
        SnapshotRegion::new(Arc::clone(&self.read_group), self.offset_in_group + local_offset, region_size)
    }

    /// Raw pointer to this region's first byte within the `ReadGroup`'s current-values buffer.
    /// Safe to dereference up to `region_size` bytes (plus any padding the caller requested via
    /// `ReadGroup::resize_for_safe_reading`) as long as the read group outlives the scan.
    pub fn get_current_values_ptr(&self) -> *const u8 {
        unsafe { self.read_group.get_current_values_ptr().add(self.offset_in_group) }
    }

    pub fn get_previous_values_ptr(&self) -> *const u8 {
        unsafe { self.read_group.get_previous_values_ptr().add(self.offset_in_group) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_read_group(bytes: &[u8]) -> Arc<ReadGroup> {
        let read_group = ReadGroup::new(0x1000, bytes.len());
        let owned = bytes.to_vec();
        read_group
            .read_all(move |_, size, out| {
                out[..size].copy_from_slice(&owned);
                Ok(size)
            })
            .unwrap();
        Arc::new(read_group)
    }

    #[test]
    fn element_count_matches_naive_stepping() {
        let read_group = make_read_group(&[0u8; 20]);
        let region = SnapshotRegion::new(read_group, 0, 20);

        assert_eq!(region.get_element_count(4, MemoryAlignment::Alignment4), 5);
        assert_eq!(region.get_element_count(8, MemoryAlignment::Alignment8), 2);
        assert_eq!(region.get_element_count(4, MemoryAlignment::Alignment1), 17);
    }

    #[test]
    fn base_address_accounts_for_group_offset() {
        let read_group = make_read_group(&[0u8; 16]);
        let region = SnapshotRegion::new(read_group, 4, 8);

        assert_eq!(region.get_base_address(), 0x1004);
        assert_eq!(region.get_region_size(), 8);
    }

    #[test]
    fn misalignment_is_relative_to_group_offset() {
        let read_group = make_read_group(&[0u8; 16]);
        let aligned = SnapshotRegion::new(read_group.clone(), 4, 8);
        let misaligned = SnapshotRegion::new(read_group, 2, 8);

        assert!(!aligned.is_misaligned_within_group(MemoryAlignment::Alignment4));
        assert!(misaligned.is_misaligned_within_group(MemoryAlignment::Alignment4));
    }
}
