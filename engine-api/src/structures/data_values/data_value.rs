use crate::structures::data_types::data_type_ref::DataTypeRef;
use serde::{Deserialize, Serialize};

/// A typed, already-encoded value: a `DataTypeRef` paired with the raw little-endian bytes
/// that represent it. This is the value carried by `Eq`/`Gt`/`IncreasedBy`/etc. constraint
/// leaves, and the value returned when reading an element out of a snapshot region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataValue {
    data_type_ref: DataTypeRef,
    value_bytes: Vec<u8>,
}

impl DataValue {
    pub fn new(
        data_type_ref: DataTypeRef,
        value_bytes: Vec<u8>,
    ) -> Self {
        Self { data_type_ref, value_bytes }
    }

    pub fn get_data_type_ref(&self) -> &DataTypeRef {
        &self.data_type_ref
    }

    pub fn get_value_bytes(&self) -> &[u8] {
        &self.value_bytes
    }

    pub fn get_size_in_bytes(&self) -> u64 {
        self.value_bytes.len() as u64
    }
}
