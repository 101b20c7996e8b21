pub mod scalar_comparable;
