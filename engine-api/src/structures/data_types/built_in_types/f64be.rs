use crate::structures::data_types::built_in_types::macros::impl_float_data_type;
use crate::structures::memory::endian::Endian;

impl_float_data_type!(DataTypeF64Be, "f64be", "f64", f64, Endian::Big, from_be_bytes, to_be_bytes, u64, 4);
