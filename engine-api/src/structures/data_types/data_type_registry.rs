use crate::structures::data_types::built_in_types::aob::data_type_aob::DataTypeAob;
use crate::structures::data_types::built_in_types::f32::DataTypeF32;
use crate::structures::data_types::built_in_types::f32be::DataTypeF32Be;
use crate::structures::data_types::built_in_types::f64::DataTypeF64;
use crate::structures::data_types::built_in_types::f64be::DataTypeF64Be;
use crate::structures::data_types::built_in_types::i16::DataTypeI16;
use crate::structures::data_types::built_in_types::i16be::DataTypeI16Be;
use crate::structures::data_types::built_in_types::i32::DataTypeI32;
use crate::structures::data_types::built_in_types::i32be::DataTypeI32Be;
use crate::structures::data_types::built_in_types::i64::DataTypeI64;
use crate::structures::data_types::built_in_types::i64be::DataTypeI64Be;
use crate::structures::data_types::built_in_types::i8::DataTypeI8;
use crate::structures::data_types::built_in_types::u16::DataTypeU16;
use crate::structures::data_types::built_in_types::u16be::DataTypeU16Be;
use crate::structures::data_types::built_in_types::u32::DataTypeU32;
use crate::structures::data_types::built_in_types::u32be::DataTypeU32Be;
use crate::structures::data_types::built_in_types::u64::DataTypeU64;
use crate::structures::data_types::built_in_types::u64be::DataTypeU64Be;
use crate::structures::data_types::built_in_types::u8::DataTypeU8;
use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::scannable_data_type::ScannableDataType;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Resolves a `DataTypeRef`'s id string to the concrete `ScannableDataType` it names. Populated
/// once, on first use, with every built-in type; there is no registration API for custom types
/// since the 18 numeric variants plus the byte-array type are the whole closed set this engine
/// understands.
pub struct DataTypeRegistry {
    types_by_id: HashMap<String, Arc<dyn ScannableDataType>>,
}

impl DataTypeRegistry {
    fn new() -> Self {
        let built_ins: Vec<Arc<dyn ScannableDataType>> = vec![
            Arc::new(DataTypeI8),
            Arc::new(DataTypeU8),
            Arc::new(DataTypeI16),
            Arc::new(DataTypeU16),
            Arc::new(DataTypeI16Be),
            Arc::new(DataTypeU16Be),
            Arc::new(DataTypeI32),
            Arc::new(DataTypeU32),
            Arc::new(DataTypeI32Be),
            Arc::new(DataTypeU32Be),
            Arc::new(DataTypeI64),
            Arc::new(DataTypeU64),
            Arc::new(DataTypeI64Be),
            Arc::new(DataTypeU64Be),
            Arc::new(DataTypeF32),
            Arc::new(DataTypeF32Be),
            Arc::new(DataTypeF64),
            Arc::new(DataTypeF64Be),
            Arc::new(DataTypeAob),
        ];

        let types_by_id = built_ins
            .into_iter()
            .map(|data_type| (data_type.get_data_type_id().to_string(), data_type))
            .collect();

        Self { types_by_id }
    }

    pub fn get_instance() -> &'static DataTypeRegistry {
        static INSTANCE: OnceLock<DataTypeRegistry> = OnceLock::new();
        INSTANCE.get_or_init(DataTypeRegistry::new)
    }

    pub fn get(
        &self,
        data_type_id: &str,
    ) -> Result<Arc<dyn ScannableDataType>, DataTypeError> {
        self.types_by_id
            .get(data_type_id)
            .cloned()
            .ok_or_else(|| DataTypeError::ParseError(format!("unknown data type id '{}'", data_type_id)))
    }

    pub fn all_data_type_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.types_by_id.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_built_in_type_id() {
        let registry = DataTypeRegistry::get_instance();
        for id in ["i8", "u8", "i16", "u16", "i16be", "u16be", "i32", "u32", "i32be", "u32be", "i64", "u64", "i64be", "u64be", "f32", "f32be", "f64", "f64be", "aob"] {
            assert!(registry.get(id).is_ok(), "expected data type id '{}' to resolve", id);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = DataTypeRegistry::get_instance();
        assert!(registry.get("not_a_real_type").is_err());
    }
}
