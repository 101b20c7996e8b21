use crate::structures::data_types::built_in_types::macros::impl_integer_data_type;
use crate::structures::memory::endian::Endian;

impl_integer_data_type!(DataTypeU16Be, "u16be", "u16", u16, Endian::Big, from_be_bytes, to_be_bytes, false, 16);
