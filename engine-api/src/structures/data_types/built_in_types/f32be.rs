use crate::structures::data_types::built_in_types::macros::impl_float_data_type;
use crate::structures::memory::endian::Endian;

impl_float_data_type!(DataTypeF32Be, "f32be", "f32", f32, Endian::Big, from_be_bytes, to_be_bytes, u32, 8);
