use std::simd::Simd;

/// Lane count used by every compiled vector comparer. Fixed rather than generic: the const-N
/// dispatch the inner loop would otherwise need is collapsed at the "compile step" into a single
/// monomorphic width, matched against the data type by string id instead of by trait bound.
pub const VECTOR_LANES: usize = 32;

pub type ScanVector = Simd<u8, VECTOR_LANES>;

pub type VectorCompareFnImmediate = Box<dyn Fn(*const u8) -> ScanVector + Send + Sync>;
pub type VectorCompareFnRelative = Box<dyn Fn(*const u8, *const u8) -> ScanVector + Send + Sync>;

/// The compiled vector comparer for one leaf. Every lane of the returned `ScanVector` is either
/// `0xFF` (pass) or `0x00` (fail) for the element occupying that byte position.
pub enum ScanFunctionVector {
    Immediate(VectorCompareFnImmediate),
    RelativeOrDelta(VectorCompareFnRelative),
}
