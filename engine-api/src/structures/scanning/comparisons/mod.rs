pub mod scan_compare_type;
pub mod scan_function_scalar;
pub mod scan_function_vector;
