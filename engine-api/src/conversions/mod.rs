pub mod conversions_from_primitives;

pub use conversions_from_primitives::Conversions;
