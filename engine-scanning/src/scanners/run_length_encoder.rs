use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;

/// Turns a left-to-right stream of per-byte pass/fail outcomes over one parent region into a
/// list of narrower survivor regions. Adjacent passing bytes are coalesced into a single region;
/// nothing is emitted until a run closes (`finalize_current_encode`) or the stream ends
/// (`gather_collected_regions`).
pub struct SnapshotRegionRunLengthEncoder<'a> {
    parent: &'a SnapshotRegion,
    element_size: u64,
    result_regions: Vec<SnapshotRegion>,
    run_start_byte_offset: u64,
    run_length_bytes: u64,
    cursor: u64,
}

impl<'a> SnapshotRegionRunLengthEncoder<'a> {
    pub fn new(
        parent: &'a SnapshotRegion,
        element_size: u64,
    ) -> Self {
        Self {
            parent,
            element_size,
            result_regions: Vec::new(),
            run_start_byte_offset: 0,
            run_length_bytes: 0,
            cursor: 0,
        }
    }

    /// Extends the current run by `n_bytes` of passing results. Never emits by itself.
    pub fn encode_batch(
        &mut self,
        n_bytes: u64,
    ) {
        self.run_length_bytes += n_bytes;
        self.cursor += n_bytes;
    }

    /// Closes the current run (emitting a survivor region if it is non-empty), then advances past
    /// `n_bytes` of failing results.
    pub fn finalize_current_encode(
        &mut self,
        n_bytes: u64,
    ) {
        if self.run_length_bytes > 0 {
            let parent_size = self.parent.get_region_size();
            let run_end = self.run_start_byte_offset + self.run_length_bytes;
            let trailing_room = parent_size.saturating_sub(run_end);
            let tail_expansion = (self.element_size.saturating_sub(1)).min(trailing_room);
            let region_size = self.run_length_bytes + tail_expansion;

            self.result_regions
                .push(self.parent.sub_region(self.run_start_byte_offset as usize, region_size as usize));
        }

        self.cursor += n_bytes;
        self.run_start_byte_offset = self.cursor;
        self.run_length_bytes = 0;
    }

    /// Closes any still-open run and returns every survivor region found so far, in ascending
    /// address order (the stream itself is scanned left to right).
    pub fn gather_collected_regions(mut self) -> Vec<SnapshotRegion> {
        self.finalize_current_encode(0);
        self.result_regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memscan_api::structures::snapshots::read_group::ReadGroup;
    use std::sync::Arc;

    fn make_parent(region_size: usize) -> SnapshotRegion {
        let read_group = Arc::new(ReadGroup::new(0x1000, region_size));
        SnapshotRegion::new(read_group, 0, region_size)
    }

    #[test]
    fn adjacent_passing_runs_coalesce_into_one_region() {
        let parent = make_parent(16);
        let mut encoder = SnapshotRegionRunLengthEncoder::new(&parent, 4);

        encoder.encode_batch(4);
        encoder.encode_batch(4);
        encoder.finalize_current_encode(4);
        encoder.encode_batch(4);

        let regions = encoder.gather_collected_regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].get_base_address(), 0x1000);
        assert_eq!(regions[0].get_region_size(), 8);
        assert_eq!(regions[1].get_base_address(), 0x100C);
        assert_eq!(regions[1].get_region_size(), 4);
    }

    #[test]
    fn trailing_run_is_expanded_by_element_size_minus_one_when_room_permits() {
        let parent = make_parent(16);
        let mut encoder = SnapshotRegionRunLengthEncoder::new(&parent, 4);

        encoder.finalize_current_encode(8);
        encoder.encode_batch(4);

        let regions = encoder.gather_collected_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].get_base_address(), 0x1008);
        assert_eq!(regions[0].get_region_size(), 7);
    }

    #[test]
    fn no_runs_produces_no_regions() {
        let parent = make_parent(16);
        let mut encoder = SnapshotRegionRunLengthEncoder::new(&parent, 4);
        encoder.finalize_current_encode(16);

        assert!(encoder.gather_collected_regions().is_empty());
    }
}
