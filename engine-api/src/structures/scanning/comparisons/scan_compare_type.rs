use serde::{Deserialize, Serialize};

/// Comparisons that need only the current element's bytes plus a bound literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanCompareTypeImmediate {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

/// Comparisons that read both the current and previous element bytes and need no literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanCompareTypeRelative {
    Unchanged,
    Changed,
    Increased,
    Decreased,
}

/// Comparisons that read both current and previous bytes and fold a bound literal into the
/// relation, e.g. "current == previous + delta".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanCompareTypeDelta {
    IncreasedBy,
    DecreasedBy,
    MultipliedBy,
    DividedBy,
    ModuloBy,
    ShiftLeftBy,
    ShiftRightBy,
    LogicalAndBy,
    LogicalOrBy,
    LogicalXorBy,
}

/// The three families a leaf constraint's compare kind can fall into. `is_relative` on the
/// wrapping `ScanConstraint` collapses `Relative` and `Delta` together, matching the rule that
/// either needs two generations of bytes to evaluate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanCompareType {
    Immediate(ScanCompareTypeImmediate),
    Relative(ScanCompareTypeRelative),
    Delta(ScanCompareTypeDelta),
}

impl ScanCompareType {
    pub fn is_relative(&self) -> bool {
        matches!(self, ScanCompareType::Relative(_) | ScanCompareType::Delta(_))
    }
}
