pub mod element_scan_plan;
pub mod snapshot_filter_element_scan_plan;
