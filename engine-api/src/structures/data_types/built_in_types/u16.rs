use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeU16, "u16", "u16", u16, Endian::Little, from_le_bytes, to_le_bytes, false, 16);
