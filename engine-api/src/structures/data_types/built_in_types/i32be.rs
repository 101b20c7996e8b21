use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeI32Be, "i32be", "i32", i32, Endian::Big, from_be_bytes, to_be_bytes, true, 8);
