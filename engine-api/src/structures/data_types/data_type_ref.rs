use serde::{Deserialize, Serialize};
use std::fmt;

/// A lightweight, cloneable handle to a scannable data type, identified by its string id
/// (e.g. `"i32"`, `"i32be"`, `"aob"`). Resolution to the concrete `DataType` impl happens
/// through `built_in_types::lookup`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataTypeRef {
    data_type_id: String,
}

impl DataTypeRef {
    pub fn new(data_type_id: &str) -> Self {
        Self {
            data_type_id: data_type_id.to_string(),
        }
    }

    pub fn get_data_type_id(&self) -> &str {
        &self.data_type_id
    }
}

impl fmt::Display for DataTypeRef {
    fn fmt(
        &self,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(formatter, "{}", self.data_type_id)
    }
}
