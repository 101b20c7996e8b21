use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Byte stride between consecutive scannable elements within a region.
///
/// `Auto` is never a variant of this enum: following the same convention the engine uses
/// elsewhere for "auto or explicit" settings (e.g. `ScanSettings::fast_scan_alignment`), auto
/// resolution is represented as `Option<MemoryAlignment>` with `None` meaning "auto".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryAlignment {
    Alignment1 = 1,
    Alignment2 = 2,
    Alignment4 = 4,
    Alignment8 = 8,
}

impl MemoryAlignment {
    pub fn value(&self) -> u64 {
        *self as u64
    }

    /// Resolves `None` ("auto") against a scanned data type's size and byte-array-ness.
    /// Auto resolves to `min(size_in_bytes, 8)` for numerics and is forced to `1` for byte arrays.
    pub fn resolve_auto(
        alignment: Option<MemoryAlignment>,
        data_type_size_in_bytes: u64,
        is_byte_array: bool,
    ) -> MemoryAlignment {
        if is_byte_array {
            return MemoryAlignment::Alignment1;
        }

        match alignment {
            Some(explicit) => explicit,
            None => MemoryAlignment::from_value(data_type_size_in_bytes.min(8)).unwrap_or(MemoryAlignment::Alignment1),
        }
    }

    pub fn from_value(value: u64) -> Option<MemoryAlignment> {
        match value {
            1 => Some(MemoryAlignment::Alignment1),
            2 => Some(MemoryAlignment::Alignment2),
            4 => Some(MemoryAlignment::Alignment4),
            8 => Some(MemoryAlignment::Alignment8),
            _ => None,
        }
    }
}

impl FromStr for MemoryAlignment {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(MemoryAlignment::Alignment1),
            "2" => Ok(MemoryAlignment::Alignment2),
            "4" => Ok(MemoryAlignment::Alignment4),
            "8" => Ok(MemoryAlignment::Alignment8),
            _ => Err(format!("Unknown memory alignment: {}", input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_resolves_to_min_of_size_and_eight() {
        assert_eq!(MemoryAlignment::resolve_auto(None, 1, false), MemoryAlignment::Alignment1);
        assert_eq!(MemoryAlignment::resolve_auto(None, 4, false), MemoryAlignment::Alignment4);
        assert_eq!(MemoryAlignment::resolve_auto(None, 8, false), MemoryAlignment::Alignment8);
    }

    #[test]
    fn auto_is_forced_to_one_for_byte_arrays() {
        assert_eq!(MemoryAlignment::resolve_auto(None, 16, true), MemoryAlignment::Alignment1);
    }

    #[test]
    fn explicit_alignment_is_respected_even_if_coarser_than_type() {
        assert_eq!(MemoryAlignment::resolve_auto(Some(MemoryAlignment::Alignment8), 1, false), MemoryAlignment::Alignment8);
    }
}
