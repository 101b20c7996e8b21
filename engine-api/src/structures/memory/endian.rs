use serde::{Deserialize, Serialize};

/// Endianness of a scannable value. Buffers sampled from the target process are always raw
/// little-endian host bytes; a big-endian data type reverses its element's bytes before the
/// typed compare is performed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endian {
    Little,
    Big,
}

impl Default for Endian {
    fn default() -> Self {
        Endian::Little
    }
}
