use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeI64, "i64", "i64", i64, Endian::Little, from_le_bytes, to_le_bytes, true, 4);
