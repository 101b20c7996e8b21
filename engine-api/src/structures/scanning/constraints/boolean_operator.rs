use serde::{Deserialize, Serialize};

/// The boolean combinator at an interior node of a constraint tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOperator {
    And,
    Or,
    Xor,
}
