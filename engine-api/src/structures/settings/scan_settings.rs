use crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance;
use crate::structures::memory::memory_alignment::MemoryAlignment;
use crate::structures::scanning::memory_read_mode::MemoryReadMode;
use crate::structures::settings::scan_thread_priority::ScanThreadPriority;
use serde::{Deserialize, Serialize};
use serde_json::to_string_pretty;
use std::fmt;

#[derive(Copy, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanSettings {
    pub scan_buffer_kb: u32,
    pub thread_priority: ScanThreadPriority,
    pub pause_while_scanning: bool,
    pub memory_alignment: Option<MemoryAlignment>,
    pub memory_read_mode: MemoryReadMode,
    pub floating_point_tolerance: FloatingPointTolerance,
    pub is_single_threaded_scan: bool,
    pub progress_report_every_n_regions: u64,
}

impl fmt::Debug for ScanSettings {
    fn fmt(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match to_string_pretty(&self) {
            Ok(json) => write!(formatter, "Settings for scan: {}", json),
            Err(_) => write!(formatter, "Scan config {{ could not serialize to JSON }}"),
        }
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            scan_buffer_kb: 2048,
            thread_priority: ScanThreadPriority::Normal,
            pause_while_scanning: false,
            memory_alignment: None,
            floating_point_tolerance: FloatingPointTolerance::default(),
            // Reading interleaved avoids a dedicated full-pass value collection step which can stall on large scans.
            memory_read_mode: MemoryReadMode::ReadInterleavedWithScan,
            is_single_threaded_scan: false,
            progress_report_every_n_regions: 32,
        }
    }
}
