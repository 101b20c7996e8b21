/// Compiled scalar ("element-wise fallback") compare actions. Built once per (constraint leaf,
/// data type) pair; invoked with a raw pointer to the current element's bytes and, for relative
/// and delta kinds, a second pointer to the previous element's bytes at the same offset.
pub type ScalarCompareFnImmediate = Box<dyn Fn(*const u8) -> bool + Send + Sync>;
pub type ScalarCompareFnRelative = Box<dyn Fn(*const u8, *const u8) -> bool + Send + Sync>;
pub type ScalarCompareFnDelta = Box<dyn Fn(*const u8, *const u8) -> bool + Send + Sync>;

/// The compiled scalar comparer for one leaf, as stored on its `SnapshotFilterElementScanPlan`.
/// `RelativeOrDelta` covers both families since both read a current and a previous pointer.
pub enum ScanFunctionScalar {
    Immediate(ScalarCompareFnImmediate),
    RelativeOrDelta(ScalarCompareFnRelative),
}
