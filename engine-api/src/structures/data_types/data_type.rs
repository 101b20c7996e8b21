use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::data_type_ref::DataTypeRef;
use crate::structures::data_values::anonymous_value_string::AnonymousValueString;
use crate::structures::data_values::anonymous_value_string_format::AnonymousValueStringFormat;
use crate::structures::data_values::data_value::DataValue;
use crate::structures::memory::endian::Endian;

/// A scannable primitive type: one of the fixed-width signed/unsigned integers, the two IEEE-754
/// floats, each in a little- or big-endian variant, or the opaque byte-array ("aob") type.
pub trait DataType: Send + Sync {
    fn get_data_type_id(&self) -> &str;

    fn get_icon_id(&self) -> &str;

    /// Fixed element size in bytes. `0` is never valid; byte-array types report the length of
    /// their pattern, which for the abstract type description is unit-sized (1) since the
    /// pattern length is only known once a value is bound to it.
    fn get_unit_size_in_bytes(&self) -> u64;

    fn get_endian(&self) -> Endian;

    fn is_floating_point(&self) -> bool;

    fn is_signed(&self) -> bool;

    fn is_byte_array(&self) -> bool {
        false
    }

    fn validate_value_string(
        &self,
        anonymous_value_string: &AnonymousValueString,
    ) -> bool;

    fn deanonymize_value_string(
        &self,
        anonymous_value_string: &AnonymousValueString,
    ) -> Result<DataValue, DataTypeError>;

    fn anonymize_value_bytes(
        &self,
        value_bytes: &[u8],
        anonymous_value_string_format: AnonymousValueStringFormat,
    ) -> Result<AnonymousValueString, DataTypeError>;

    fn get_supported_anonymous_value_string_formats(&self) -> Vec<AnonymousValueStringFormat>;

    fn get_default_anonymous_value_string_format(&self) -> AnonymousValueStringFormat;

    fn get_default_value(
        &self,
        data_type_ref: DataTypeRef,
    ) -> DataValue;
}
