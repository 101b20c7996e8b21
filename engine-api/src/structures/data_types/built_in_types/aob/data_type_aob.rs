use crate::structures::data_types::data_type::DataType;
use crate::structures::data_types::data_type_error::DataTypeError;
use crate::structures::data_types::data_type_ref::DataTypeRef;
use crate::structures::data_values::anonymous_value_string::AnonymousValueString;
use crate::structures::data_values::anonymous_value_string_format::AnonymousValueStringFormat;
use crate::structures::data_values::container_type::ContainerType;
use crate::structures::data_values::data_value::DataValue;
use crate::structures::memory::endian::Endian;

/// The "array of bytes" type: an opaque, variable-length byte pattern. Unlike the numeric types
/// its element size is only known once a value is bound to it, so `get_unit_size_in_bytes`
/// reports `1` (a per-byte stride) rather than a fixed width.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataTypeAob;

impl DataTypeAob {
    pub const DATA_TYPE_ID: &'static str = "aob";

    fn parse_hex_bytes(value_string: &str) -> Result<Vec<u8>, DataTypeError> {
        let trimmed = value_string.trim();
        if trimmed.is_empty() {
            return Err(DataTypeError::ParseError("AOB pattern cannot be empty".to_string()));
        }

        let mut bytes = Vec::new();
        let tokens: Vec<&str> = trimmed.split(|ch: char| ch.is_whitespace() || ch == ',').filter(|token| !token.is_empty()).collect();

        if tokens.len() <= 1 {
            let mut cleaned = trimmed;
            if cleaned.starts_with("0x") || cleaned.starts_with("0X") {
                cleaned = &cleaned[2..];
            }

            if cleaned.len() % 2 != 0 {
                return Err(DataTypeError::ParseError("AOB hex string length must be even".to_string()));
            }

            for chunk in cleaned.as_bytes().chunks(2) {
                let hex_pair = std::str::from_utf8(chunk).map_err(|_| DataTypeError::ParseError("invalid UTF-8 in hex string".to_string()))?;
                let value = u8::from_str_radix(hex_pair, 16).map_err(|error| DataTypeError::ParseError(format!("failed to parse hex byte '{}': {}", hex_pair, error)))?;
                bytes.push(value);
            }

            return Ok(bytes);
        }

        for token in tokens {
            let mut token = token.trim();
            if token.starts_with("0x") || token.starts_with("0X") {
                token = &token[2..];
            }

            let owned = if token.len() == 1 { format!("0{}", token) } else { token.to_string() };

            if owned.len() != 2 {
                return Err(DataTypeError::ParseError(format!("invalid AOB token '{}', expected 1-2 hex digits", owned)));
            }

            let value = u8::from_str_radix(&owned, 16).map_err(|error| DataTypeError::ParseError(format!("failed to parse hex byte '{}': {}", owned, error)))?;
            bytes.push(value);
        }

        Ok(bytes)
    }

    fn format_hex_bytes(value_bytes: &[u8]) -> String {
        value_bytes.iter().map(|value| format!("{:02X}", value)).collect::<Vec<_>>().join(" ")
    }
}

impl DataType for DataTypeAob {
    fn get_data_type_id(&self) -> &str {
        Self::DATA_TYPE_ID
    }

    fn get_icon_id(&self) -> &str {
        Self::DATA_TYPE_ID
    }

    fn get_unit_size_in_bytes(&self) -> u64 {
        1
    }

    fn get_endian(&self) -> Endian {
        Endian::Little
    }

    fn is_floating_point(&self) -> bool {
        false
    }

    fn is_signed(&self) -> bool {
        false
    }

    fn is_byte_array(&self) -> bool {
        true
    }

    fn validate_value_string(
        &self,
        anonymous_value_string: &AnonymousValueString,
    ) -> bool {
        self.deanonymize_value_string(anonymous_value_string).is_ok()
    }

    fn deanonymize_value_string(
        &self,
        anonymous_value_string: &AnonymousValueString,
    ) -> Result<DataValue, DataTypeError> {
        let bytes = match anonymous_value_string.get_anonymous_value_string_format() {
            AnonymousValueStringFormat::Hexadecimal | AnonymousValueStringFormat::String | AnonymousValueStringFormat::Decimal | AnonymousValueStringFormat::Address => {
                Self::parse_hex_bytes(anonymous_value_string.get_anonymous_value_string())?
            }
            AnonymousValueStringFormat::Binary => return Err(DataTypeError::ParseError("binary format is not supported for AOB".to_string())),
        };

        Ok(DataValue::new(DataTypeRef::new(Self::DATA_TYPE_ID), bytes))
    }

    fn anonymize_value_bytes(
        &self,
        value_bytes: &[u8],
        anonymous_value_string_format: AnonymousValueStringFormat,
    ) -> Result<AnonymousValueString, DataTypeError> {
        match anonymous_value_string_format {
            AnonymousValueStringFormat::Hexadecimal | AnonymousValueStringFormat::Address => Ok(AnonymousValueString::new(
                Self::format_hex_bytes(value_bytes),
                anonymous_value_string_format,
                ContainerType::ArrayFixed(value_bytes.len() as u64),
            )),
            other => Err(DataTypeError::UnsupportedOperation {
                data_type_id: Self::DATA_TYPE_ID.to_string(),
                operation: format!("{:?}", other),
            }),
        }
    }

    fn get_supported_anonymous_value_string_formats(&self) -> Vec<AnonymousValueStringFormat> {
        vec![AnonymousValueStringFormat::Hexadecimal]
    }

    fn get_default_anonymous_value_string_format(&self) -> AnonymousValueStringFormat {
        AnonymousValueStringFormat::Hexadecimal
    }

    fn get_default_value(
        &self,
        data_type_ref: DataTypeRef,
    ) -> DataValue {
        DataValue::new(data_type_ref, vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_hex_tokens() {
        let data_type = DataTypeAob;
        let anonymous_value_string = AnonymousValueString::new("E8 03 00 00".to_string(), AnonymousValueStringFormat::Hexadecimal, ContainerType::ArrayFixed(4));
        let data_value = data_type.deanonymize_value_string(&anonymous_value_string).unwrap();
        assert_eq!(data_value.get_value_bytes(), &[0xE8, 0x03, 0x00, 0x00]);
    }

    #[test]
    fn parses_contiguous_hex_string() {
        let data_type = DataTypeAob;
        let anonymous_value_string = AnonymousValueString::new("E8030000".to_string(), AnonymousValueStringFormat::Hexadecimal, ContainerType::ArrayFixed(4));
        let data_value = data_type.deanonymize_value_string(&anonymous_value_string).unwrap();
        assert_eq!(data_value.get_value_bytes(), &[0xE8, 0x03, 0x00, 0x00]);
    }

    #[test]
    fn odd_length_contiguous_string_is_rejected() {
        let data_type = DataTypeAob;
        let anonymous_value_string = AnonymousValueString::new("E803000".to_string(), AnonymousValueStringFormat::Hexadecimal, ContainerType::ArrayFixed(0));
        assert!(data_type.deanonymize_value_string(&anonymous_value_string).is_err());
    }
}
