use serde::{Deserialize, Serialize};

/// A bare `(base_address, region_size)` pair, used wherever a caller needs to describe a memory
/// span without yet attaching a `ReadGroup` or any scan state to it (e.g. the initial region
/// list handed to a fresh snapshot).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRegion {
    base_address: u64,
    region_size: u64,
}

impl NormalizedRegion {
    pub fn new(
        base_address: u64,
        region_size: u64,
    ) -> Self {
        Self { base_address, region_size }
    }

    pub fn get_base_address(&self) -> u64 {
        self.base_address
    }

    pub fn get_region_size(&self) -> u64 {
        self.region_size
    }

    pub fn get_end_address(&self) -> u64 {
        self.base_address + self.region_size
    }
}
