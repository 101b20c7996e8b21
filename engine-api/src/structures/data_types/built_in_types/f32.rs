use crate::structures::data_types::built_in_types::macros::impl_float_data_type;
use crate::structures::memory::endian::Endian;

impl_float_data_type!(DataTypeF32, "f32", "f32", f32, Endian::Little, from_le_bytes, to_le_bytes, u32, 8);
