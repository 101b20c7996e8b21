use crate::structures::scanning::comparisons::scan_function_vector::{ScanVector, VECTOR_LANES};
use std::simd::{LaneCount, Mask, Simd, SimdElement, SupportedLaneCount};

/// Byte-swaps a lane's value when its declared endian doesn't match the host. Every built-in
/// numeric type implements this so `simd_load` can stay generic over `$rust_type`.
pub trait ByteSwappable: Copy {
    fn maybe_swap(self, needs_swap: bool) -> Self;
}

macro_rules! impl_byte_swappable_int {
    ($($rust_type:ty),+ $(,)?) => {
        $(impl ByteSwappable for $rust_type {
            fn maybe_swap(self, needs_swap: bool) -> Self {
                if needs_swap { self.swap_bytes() } else { self }
            }
        })+
    };
}
impl_byte_swappable_int!(i8, u8, i16, u16, i32, u32, i64, u64);

impl ByteSwappable for f32 {
    fn maybe_swap(self, needs_swap: bool) -> Self {
        if needs_swap { f32::from_bits(self.to_bits().swap_bytes()) } else { self }
    }
}

impl ByteSwappable for f64 {
    fn maybe_swap(self, needs_swap: bool) -> Self {
        if needs_swap { f64::from_bits(self.to_bits().swap_bytes()) } else { self }
    }
}

/// Loads `LANES` contiguous elements of `T` starting at `pointer`, swapping each lane's bytes
/// when the source data's declared endian doesn't match the host's. `pointer` must have at least
/// `LANES * size_of::<T>()` readable bytes, which the scan driver guarantees via
/// `ReadGroup::resize_for_safe_reading`.
///
/// # Safety
/// `pointer` must be valid for reads of `LANES * size_of::<T>()` bytes.
#[inline]
pub unsafe fn simd_load<T, const LANES: usize>(
    pointer: *const u8,
    needs_swap: bool,
) -> Simd<T, LANES>
where
    T: SimdElement + Default + ByteSwappable,
    LaneCount<LANES>: SupportedLaneCount,
{
    let mut array = [T::default(); LANES];
    unsafe {
        std::ptr::copy_nonoverlapping(pointer, array.as_mut_ptr() as *mut u8, std::mem::size_of_val(&array));
    }
    for element in array.iter_mut() {
        *element = element.maybe_swap(needs_swap);
    }
    Simd::from_array(array)
}

/// Writes a mask lane's all-0x00/all-0xFF bit pattern out as raw bytes. Mask lane types are
/// always a plain signed integer the same width as the compared type, so this is implemented
/// once per integer width rather than once per `DataType`.
pub trait MaskInt: Copy {
    fn write_ne_bytes(self, out: &mut [u8]);
}

macro_rules! impl_mask_int {
    ($($rust_type:ty),+ $(,)?) => {
        $(impl MaskInt for $rust_type {
            fn write_ne_bytes(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_ne_bytes());
            }
        })+
    };
}
impl_mask_int!(i8, i16, i32, i64);

/// Expands a per-lane comparison mask into the byte-per-source-byte `ScanVector` format every
/// scanner expects: each lane's all-true/all-false result fills that lane's full byte width with
/// `0xFF`/`0x00`.
pub fn mask_to_scan_vector<T, const LANES: usize>(mask: Mask<<T as SimdElement>::Mask, LANES>) -> ScanVector
where
    T: SimdElement,
    <T as SimdElement>::Mask: MaskInt,
    LaneCount<LANES>: SupportedLaneCount,
{
    let stride = VECTOR_LANES / LANES;
    let mut out = [0u8; VECTOR_LANES];
    for (lane_index, value) in mask.to_int().to_array().into_iter().enumerate() {
        value.write_ne_bytes(&mut out[lane_index * stride..(lane_index + 1) * stride]);
    }
    ScanVector::from_array(out)
}
