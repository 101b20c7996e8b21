use crate::structures::data_values::anonymous_value_string_format::AnonymousValueStringFormat;
use crate::structures::data_values::container_type::ContainerType;

/// A user-facing literal (e.g. `"1000"`, `"E8 03 00 00"`) paired with the notation it was
/// written in. `DataType::deanonymize_value_string` turns this into typed `DataValue` bytes.
#[derive(Clone, Debug)]
pub struct AnonymousValueString {
    value_string: String,
    format: AnonymousValueStringFormat,
    container_type: ContainerType,
}

impl AnonymousValueString {
    pub fn new(
        value_string: String,
        format: AnonymousValueStringFormat,
        container_type: ContainerType,
    ) -> Self {
        Self {
            value_string,
            format,
            container_type,
        }
    }

    pub fn get_anonymous_value_string(&self) -> &str {
        &self.value_string
    }

    pub fn get_anonymous_value_string_format(&self) -> AnonymousValueStringFormat {
        self.format
    }

    pub fn get_container_type(&self) -> &ContainerType {
        &self.container_type
    }
}
