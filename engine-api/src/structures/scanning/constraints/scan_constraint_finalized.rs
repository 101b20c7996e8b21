use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::data_type_registry::DataTypeRegistry;
use crate::structures::data_types::scannable_data_type::ScannableDataType;
use crate::structures::scanning::comparisons::scan_function_scalar::ScanFunctionScalar;
use crate::structures::scanning::comparisons::scan_function_vector::ScanFunctionVector;
use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;
use std::sync::Arc;

/// A single leaf constraint with its compare closures already built. This is the "compile step"
/// output for one leaf: the data type the leaf's value is declared against is resolved once here,
/// and the scalar/vector comparers are built from it once, rather than re-dispatched per element.
pub struct ScanConstraintFinalized {
    scan_constraint: ScanConstraint,
    data_type: Arc<dyn ScannableDataType>,
    scan_function_scalar: Option<ScanFunctionScalar>,
    scan_function_vector: Option<ScanFunctionVector>,
}

impl ScanConstraintFinalized {
    pub fn new(scan_constraint: ScanConstraint) -> Result<Self, DataTypeError> {
        let data_type_id = scan_constraint.get_compare_value().get_data_type_ref().get_data_type_id().to_string();
        let data_type = DataTypeRegistry::get_instance().get(&data_type_id)?;

        let scan_function_scalar = data_type.build_scalar_compare_fn(&scan_constraint);
        let scan_function_vector = data_type.build_vector_compare_fn(&scan_constraint);

        Ok(Self {
            scan_constraint,
            data_type,
            scan_function_scalar,
            scan_function_vector,
        })
    }

    pub fn get_scan_constraint(&self) -> &ScanConstraint {
        &self.scan_constraint
    }

    pub fn get_data_type(&self) -> &Arc<dyn ScannableDataType> {
        &self.data_type
    }

    pub fn get_scan_function_scalar(&self) -> Option<&ScanFunctionScalar> {
        self.scan_function_scalar.as_ref()
    }

    pub fn get_scan_function_vector(&self) -> Option<&ScanFunctionVector> {
        self.scan_function_vector.as_ref()
    }

    pub fn is_relative(&self) -> bool {
        self.scan_constraint.is_relative()
    }

    pub fn is_supported(&self) -> bool {
        self.scan_function_scalar.is_some()
    }
}
