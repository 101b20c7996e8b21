pub mod built_in_types;
pub mod comparisons;
pub mod data_type;
pub mod data_type_error;
pub mod data_type_ref;
pub mod data_type_registry;
pub mod floating_point_tolerance;
pub mod scannable_data_type;
