use serde::{Deserialize, Serialize};

/// Tolerance applied when comparing floating-point elements against an immediate value or
/// against their previous sample. `Exact` requires bit-for-bit equality of the typed values
/// (not the raw bytes -- `Unchanged`/`Changed` are always byte-exact regardless of this setting).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FloatingPointTolerance {
    Exact,
    Epsilon(f64),
}

impl Default for FloatingPointTolerance {
    fn default() -> Self {
        FloatingPointTolerance::Epsilon(0.00001)
    }
}

impl FloatingPointTolerance {
    pub fn epsilon_f32(&self) -> f32 {
        match self {
            FloatingPointTolerance::Exact => 0.0,
            FloatingPointTolerance::Epsilon(value) => *value as f32,
        }
    }

    pub fn epsilon_f64(&self) -> f64 {
        match self {
            FloatingPointTolerance::Exact => 0.0,
            FloatingPointTolerance::Epsilon(value) => *value,
        }
    }
}
