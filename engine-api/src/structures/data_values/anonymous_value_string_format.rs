use serde::{Deserialize, Serialize};

/// The textual notation a user-entered literal was written in, before it is deanonymized
/// (parsed) into the byte representation of a specific `DataType`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnonymousValueStringFormat {
    Decimal,
    Hexadecimal,
    Binary,
    Address,
    String,
}
