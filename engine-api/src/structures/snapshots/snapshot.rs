use crate::structures::memory::memory_alignment::MemoryAlignment;
use crate::structures::snapshots::snapshot_region::SnapshotRegion;

/// An ordered, disjoint set of `SnapshotRegion`s sorted ascending by base address, with aggregate
/// counts and a binary-search index from a linear element index back to its containing region.
pub struct Snapshot {
    name: String,
    snapshot_regions: Vec<SnapshotRegion>,
    alignment: MemoryAlignment,
    region_count: u64,
    byte_count: u64,
    element_count: u64,
}

impl Snapshot {
    pub fn new(
        name: String,
        mut snapshot_regions: Vec<SnapshotRegion>,
        alignment: MemoryAlignment,
        data_type_size_in_bytes: u64,
    ) -> Self {
        snapshot_regions.sort_by_key(|region| region.get_base_address());

        let mut snapshot = Self {
            name,
            snapshot_regions,
            alignment,
            region_count: 0,
            byte_count: 0,
            element_count: 0,
        };
        snapshot.recompute_aggregates(data_type_size_in_bytes);
        snapshot
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_snapshot_regions(&self) -> &[SnapshotRegion] {
        &self.snapshot_regions
    }

    pub fn get_snapshot_regions_mut(&mut self) -> &mut Vec<SnapshotRegion> {
        &mut self.snapshot_regions
    }

    /// Replaces the region set (e.g. after a scan produces new survivors), re-sorts by address,
    /// drops any zero-size regions, and recomputes the aggregate counts and the
    /// `base_element_index` prefix sum used by the binary-search index.
    pub fn set_snapshot_regions(
        &mut self,
        mut snapshot_regions: Vec<SnapshotRegion>,
        data_type_size_in_bytes: u64,
    ) {
        snapshot_regions.retain(|region| region.get_region_size() > 0);
        snapshot_regions.sort_by_key(|region| region.get_base_address());
        self.snapshot_regions = snapshot_regions;
        self.recompute_aggregates(data_type_size_in_bytes);
    }

    fn recompute_aggregates(
        &mut self,
        data_type_size_in_bytes: u64,
    ) {
        let mut running_element_index = 0u64;
        let mut byte_count = 0u64;

        for region in self.snapshot_regions.iter_mut() {
            region.set_base_element_index(running_element_index);
            running_element_index += region.get_element_count(data_type_size_in_bytes, self.alignment);
            byte_count += region.get_region_size();
        }

        self.region_count = self.snapshot_regions.len() as u64;
        self.byte_count = byte_count;
        self.element_count = running_element_index;
    }

    pub fn get_region_count(&self) -> u64 {
        self.region_count
    }

    pub fn get_byte_count(&self) -> u64 {
        self.byte_count
    }

    pub fn get_element_count(&self) -> u64 {
        self.element_count
    }

    pub fn get_alignment(&self) -> MemoryAlignment {
        self.alignment
    }

    /// Binary search over the `base_element_index` prefix sum for the region containing
    /// `element_index`, given the caller's element size.
    pub fn find_region_for_element_index(
        &self,
        element_index: u64,
        data_type_size_in_bytes: u64,
    ) -> Option<&SnapshotRegion> {
        let search_result = self.snapshot_regions.binary_search_by(|region| {
            let start = region.get_base_element_index();
            let end = start + region.get_element_count(data_type_size_in_bytes, self.alignment);

            if element_index < start {
                std::cmp::Ordering::Greater
            } else if element_index >= end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        });

        search_result.ok().map(|index| &self.snapshot_regions[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::snapshots::read_group::ReadGroup;
    use std::sync::Arc;

    fn make_region(
        base_address: u64,
        region_size: usize,
    ) -> SnapshotRegion {
        let read_group = Arc::new(ReadGroup::new(base_address, region_size));
        SnapshotRegion::new(read_group, 0, region_size)
    }

    #[test]
    fn aggregates_recompute_across_regions() {
        let regions = vec![make_region(0x2000, 16), make_region(0x1000, 8)];
        let snapshot = Snapshot::new("test".to_string(), regions, MemoryAlignment::Alignment4, 4);

        assert_eq!(snapshot.get_region_count(), 2);
        assert_eq!(snapshot.get_byte_count(), 24);
        assert_eq!(snapshot.get_element_count(), 2 + 4);
        // Sorted ascending by base address.
        assert_eq!(snapshot.get_snapshot_regions()[0].get_base_address(), 0x1000);
    }

    #[test]
    fn binary_search_finds_containing_region() {
        let regions = vec![make_region(0x1000, 8), make_region(0x2000, 16)];
        let snapshot = Snapshot::new("test".to_string(), regions, MemoryAlignment::Alignment4, 4);

        let found = snapshot.find_region_for_element_index(3, 4).unwrap();
        assert_eq!(found.get_base_address(), 0x2000);
    }

    #[test]
    fn set_snapshot_regions_drops_empty_regions() {
        let mut snapshot = Snapshot::new("test".to_string(), vec![make_region(0x1000, 8)], MemoryAlignment::Alignment4, 4);
        snapshot.set_snapshot_regions(vec![make_region(0x1000, 0), make_region(0x2000, 4)], 4);

        assert_eq!(snapshot.get_region_count(), 1);
    }
}
