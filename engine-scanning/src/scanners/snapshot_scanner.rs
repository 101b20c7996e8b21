use memscan_api::structures::scanning::plans::element_scan::snapshot_filter_element_scan_plan::SnapshotFilterElementScanPlan;
use memscan_api::structures::snapshots::snapshot_region::SnapshotRegion;

/// Scans one parent region against a finalized constraint tree, emitting its surviving
/// sub-regions. Implementations differ only in how they walk the region's bytes; the compiled
/// compare actions and the run-length encoder are shared.
pub trait Scanner: Send + Sync {
    fn get_scanner_name(&self) -> &'static str;

    fn scan_region(
        &self,
        snapshot_region: &SnapshotRegion,
        snapshot_filter_element_scan_plan: &SnapshotFilterElementScanPlan,
    ) -> Vec<SnapshotRegion>;
}
