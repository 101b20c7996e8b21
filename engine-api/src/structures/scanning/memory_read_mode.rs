use serde::{Deserialize, Serialize};

/// Whether the scan driver collects fresh values for the whole input snapshot before scanning
/// any of it, or lets each worker read its own region immediately before scanning it.
///
/// `ReadBeforeScan` is slower overall (two full passes) but captures a single consistent instant
/// of memory across the whole snapshot. `ReadInterleavedWithScan` is faster and is the default for
/// large scans where values may already be drifting between regions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryReadMode {
    ReadBeforeScan,
    ReadInterleavedWithScan,
}

impl Default for MemoryReadMode {
    fn default() -> Self {
        MemoryReadMode::ReadInterleavedWithScan
    }
}
