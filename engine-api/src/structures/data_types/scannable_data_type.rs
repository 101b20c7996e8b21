use crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable;
use crate::structures::data_types::data_type::DataType;

/// A `DataType` that also knows how to compile compare closures against a leaf constraint.
/// Every built-in type implements both halves; this just lets the registry hand back a single
/// trait object instead of two.
pub trait ScannableDataType: DataType + ScalarComparable {}

impl<T: DataType + ScalarComparable> ScannableDataType for T {}
