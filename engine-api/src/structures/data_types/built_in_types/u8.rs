use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeU8, "u8", "u8", u8, Endian::Little, from_le_bytes, to_le_bytes, false, 32);
