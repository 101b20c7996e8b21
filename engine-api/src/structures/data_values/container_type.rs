use serde::{Deserialize, Serialize};

/// Shape of a data value's backing bytes. Scalars are a single fixed-size value; `ArrayFixed`
/// describes an opaque byte-array (AOB) value of the given length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerType {
    Scalar,
    ArrayFixed(u64),
}
