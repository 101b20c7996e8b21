pub mod scanner_vector_aligned;
pub mod scanner_vector_misaligned;
