pub mod data_type_aob;
mod data_type_aob_scalar_comparisons;
