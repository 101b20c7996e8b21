/// Shared scaffolding emitted by both `impl_integer_data_type!` and `impl_float_data_type!`:
/// the struct and the `DataType` impl. The compare-kind-specific bodies (exact vs. tolerance
/// equality, integer-only bitwise/shift kinds, and the two vector dispatch flavors) live in the
/// two calling macros below.
macro_rules! impl_numeric_data_type_scaffold {
    (
        $struct_name:ident,
        $data_type_id:expr,
        $icon_id:expr,
        $rust_type:ty,
        $endian:expr,
        $from_bytes:ident,
        $to_bytes:ident,
        $is_floating:expr,
        $is_signed:expr
    ) => {
        use crate::structures::data_types::data_type::DataType;
        use crate::structures::data_types::data_type_error::DataTypeError;
        use crate::structures::data_types::data_type_ref::DataTypeRef;
        use crate::structures::data_values::anonymous_value_string::AnonymousValueString;
        use crate::structures::data_values::anonymous_value_string_format::AnonymousValueStringFormat;
        use crate::structures::data_values::container_type::ContainerType;
        use crate::structures::data_values::data_value::DataValue;
        use crate::structures::memory::endian::Endian;
        use crate::structures::scanning::comparisons::scan_function_scalar::ScanFunctionScalar;
        use crate::structures::scanning::comparisons::scan_function_vector::{ScanFunctionVector, ScanVector, VECTOR_LANES};

        const UNIT_SIZE: u64 = std::mem::size_of::<$rust_type>() as u64;

        #[derive(Clone, Copy, Debug, Default)]
        pub struct $struct_name;

        impl $struct_name {
            pub const DATA_TYPE_ID: &'static str = $data_type_id;

            #[inline]
            fn read(bytes: *const u8) -> $rust_type {
                let mut buffer = [0u8; UNIT_SIZE as usize];
                unsafe { std::ptr::copy_nonoverlapping(bytes, buffer.as_mut_ptr(), UNIT_SIZE as usize) };
                <$rust_type>::$from_bytes(buffer)
            }

            fn literal_bytes(value: $rust_type) -> Vec<u8> {
                value.$to_bytes().to_vec()
            }
        }

        impl DataType for $struct_name {
            fn get_data_type_id(&self) -> &str {
                Self::DATA_TYPE_ID
            }

            fn get_icon_id(&self) -> &str {
                $icon_id
            }

            fn get_unit_size_in_bytes(&self) -> u64 {
                UNIT_SIZE
            }

            fn get_endian(&self) -> Endian {
                $endian
            }

            fn is_floating_point(&self) -> bool {
                $is_floating
            }

            fn is_signed(&self) -> bool {
                $is_signed
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
                let literal = anonymous_value_string.get_anonymous_value_string();

                match anonymous_value_string.get_anonymous_value_string_format() {
                    AnonymousValueStringFormat::Decimal | AnonymousValueStringFormat::Address => {
                        let parsed: $rust_type = literal
                            .trim()
                            .parse()
                            .map_err(|_| DataTypeError::ParseError(format!("'{}' is not a valid {}", literal, $data_type_id)))?;
                        Ok(DataValue::new(DataTypeRef::new(Self::DATA_TYPE_ID), Self::literal_bytes(parsed)))
                    }
                    other => Err(DataTypeError::UnsupportedOperation {
                        data_type_id: $data_type_id.to_string(),
                        operation: format!("{:?} literal", other),
                    }),
                }
            }

            fn anonymize_value_bytes(
                &self,
                value_bytes: &[u8],
                anonymous_value_string_format: AnonymousValueStringFormat,
            ) -> Result<AnonymousValueString, DataTypeError> {
                if value_bytes.len() != UNIT_SIZE as usize {
                    return Err(DataTypeError::TypeMismatch {
                        expected: format!("{} bytes", UNIT_SIZE),
                        actual: format!("{} bytes", value_bytes.len()),
                    });
                }

                let mut buffer = [0u8; UNIT_SIZE as usize];
                buffer.copy_from_slice(value_bytes);
                let value = <$rust_type>::from_le_bytes(buffer);

                match anonymous_value_string_format {
                    AnonymousValueStringFormat::Decimal | AnonymousValueStringFormat::Address => {
                        Ok(AnonymousValueString::new(format!("{}", value), anonymous_value_string_format, ContainerType::Scalar))
                    }
                    other => Err(DataTypeError::UnsupportedOperation {
                        data_type_id: $data_type_id.to_string(),
                        operation: format!("{:?}", other),
                    }),
                }
            }

            fn get_supported_anonymous_value_string_formats(&self) -> Vec<AnonymousValueStringFormat> {
                vec![AnonymousValueStringFormat::Decimal]
            }

            fn get_default_anonymous_value_string_format(&self) -> AnonymousValueStringFormat {
                AnonymousValueStringFormat::Decimal
            }

            fn get_default_value(
                &self,
                data_type_ref: DataTypeRef,
            ) -> DataValue {
                DataValue::new(data_type_ref, Self::literal_bytes(<$rust_type>::default()))
            }
        }
    };
}

/// Builds a genuine packed SIMD comparer for an integer type: one `Simd<$rust_type, LANES>` load
/// per side, compared with `simd_eq`/`simd_gt`/etc. directly (never by replaying the scalar
/// closure element-by-element). `LANES = VECTOR_LANES / size_of::<$rust_type>()`, so the whole
/// `VECTOR_LANES`-byte load is covered by one comparison.
///
/// Re-dispatches on the constraint's compare kind itself (mirroring `build_scalar_compare_fn`'s
/// dispatch) rather than deriving from the scalar closure, since there's no portable way to get a
/// typed SIMD op back out of an already-erased `Fn(*const u8) -> bool`.
macro_rules! impl_integer_vector_dispatch {
    ($struct_name:ident, $rust_type:ty, $endian:expr, $lanes:expr) => {
        fn build_vector_compare_fn(
            &self,
            scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint,
        ) -> Option<ScanFunctionVector> {
            use crate::structures::data_types::built_in_types::simd_support::{mask_to_scan_vector, simd_load};
            use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta, ScanCompareTypeImmediate, ScanCompareTypeRelative};
            use std::simd::cmp::{SimdPartialEq, SimdPartialOrd};
            use std::simd::Simd;

            const LANES: usize = $lanes;
            const NEEDS_SWAP: bool = matches!($endian, crate::structures::memory::endian::Endian::Big);

            let compare_type = *scan_constraint.get_compare_type();

            match compare_type {
                ScanCompareType::Immediate(kind) => {
                    let target: $rust_type = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                    let target_vector = Simd::<$rust_type, LANES>::splat(target);

                    Some(ScanFunctionVector::Immediate(Box::new(move |pointer| {
                        let current = unsafe { simd_load::<$rust_type, LANES>(pointer, NEEDS_SWAP) };
                        let mask = match kind {
                            ScanCompareTypeImmediate::Equal => current.simd_eq(target_vector),
                            ScanCompareTypeImmediate::NotEqual => current.simd_ne(target_vector),
                            ScanCompareTypeImmediate::GreaterThan => current.simd_gt(target_vector),
                            ScanCompareTypeImmediate::GreaterThanOrEqual => current.simd_ge(target_vector),
                            ScanCompareTypeImmediate::LessThan => current.simd_lt(target_vector),
                            ScanCompareTypeImmediate::LessThanOrEqual => current.simd_le(target_vector),
                        };
                        mask_to_scan_vector::<$rust_type, LANES>(mask)
                    })))
                }
                ScanCompareType::Relative(kind) => Some(ScanFunctionVector::RelativeOrDelta(Box::new(move |current_pointer, previous_pointer| {
                    let current = unsafe { simd_load::<$rust_type, LANES>(current_pointer, NEEDS_SWAP) };
                    let previous = unsafe { simd_load::<$rust_type, LANES>(previous_pointer, NEEDS_SWAP) };
                    let mask = match kind {
                        ScanCompareTypeRelative::Changed => current.simd_ne(previous),
                        ScanCompareTypeRelative::Unchanged => current.simd_eq(previous),
                        ScanCompareTypeRelative::Increased => current.simd_gt(previous),
                        ScanCompareTypeRelative::Decreased => current.simd_lt(previous),
                    };
                    mask_to_scan_vector::<$rust_type, LANES>(mask)
                }))),
                ScanCompareType::Delta(kind) => {
                    let operand: $rust_type = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                    if matches!(kind, ScanCompareTypeDelta::DividedBy | ScanCompareTypeDelta::ModuloBy) && operand == 0 as $rust_type {
                        return None;
                    }
                    let operand_vector = Simd::<$rust_type, LANES>::splat(operand);

                    Some(ScanFunctionVector::RelativeOrDelta(Box::new(move |current_pointer, previous_pointer| {
                        let current = unsafe { simd_load::<$rust_type, LANES>(current_pointer, NEEDS_SWAP) };
                        let previous = unsafe { simd_load::<$rust_type, LANES>(previous_pointer, NEEDS_SWAP) };
                        let expected = match kind {
                            ScanCompareTypeDelta::IncreasedBy => previous + operand_vector,
                            ScanCompareTypeDelta::DecreasedBy => previous - operand_vector,
                            ScanCompareTypeDelta::MultipliedBy => previous * operand_vector,
                            ScanCompareTypeDelta::DividedBy => previous / operand_vector,
                            ScanCompareTypeDelta::ModuloBy => previous % operand_vector,
                            ScanCompareTypeDelta::ShiftLeftBy => previous << operand_vector,
                            ScanCompareTypeDelta::ShiftRightBy => previous >> operand_vector,
                            ScanCompareTypeDelta::LogicalAndBy => previous & operand_vector,
                            ScanCompareTypeDelta::LogicalOrBy => previous | operand_vector,
                            ScanCompareTypeDelta::LogicalXorBy => previous ^ operand_vector,
                        };
                        mask_to_scan_vector::<$rust_type, LANES>(current.simd_eq(expected))
                    })))
                }
            }
        }
    };
}

/// Builds a genuine packed SIMD comparer for a float type. `Changed`/`Unchanged` compare the raw
/// bit pattern (via the same-width unsigned integer lanes) rather than numeric equality, matching
/// the scalar path's byte-slice comparison: two identically-bit-patterned NaNs count as
/// unchanged even though IEEE-754 equality would say they differ. Every other kind compares
/// typed `$rust_type` lanes and honors the constraint's tolerance the way `tolerant_eq` does.
macro_rules! impl_float_vector_dispatch {
    ($struct_name:ident, $rust_type:ty, $bits_type:ty, $endian:expr, $lanes:expr) => {
        fn build_vector_compare_fn(
            &self,
            scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint,
        ) -> Option<ScanFunctionVector> {
            use crate::structures::data_types::built_in_types::simd_support::{mask_to_scan_vector, simd_load};
            use crate::structures::scanning::comparisons::scan_compare_type::{ScanCompareType, ScanCompareTypeDelta, ScanCompareTypeImmediate, ScanCompareTypeRelative};
            use std::simd::cmp::{SimdPartialEq, SimdPartialOrd};
            use std::simd::Simd;

            const LANES: usize = $lanes;
            const NEEDS_SWAP: bool = matches!($endian, crate::structures::memory::endian::Endian::Big);

            let compare_type = *scan_constraint.get_compare_type();

            match compare_type {
                ScanCompareType::Immediate(kind) => {
                    let target: $rust_type = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                    let tolerance = scan_constraint.get_floating_point_tolerance();
                    let target_vector = Simd::<$rust_type, LANES>::splat(target);

                    Some(ScanFunctionVector::Immediate(Box::new(move |pointer| {
                        let current = unsafe { simd_load::<$rust_type, LANES>(pointer, NEEDS_SWAP) };
                        let mask = match kind {
                            ScanCompareTypeImmediate::Equal => Self::tolerant_eq_simd(current, target_vector, tolerance),
                            ScanCompareTypeImmediate::NotEqual => !Self::tolerant_eq_simd(current, target_vector, tolerance),
                            ScanCompareTypeImmediate::GreaterThan => current.simd_gt(target_vector),
                            ScanCompareTypeImmediate::GreaterThanOrEqual => current.simd_ge(target_vector),
                            ScanCompareTypeImmediate::LessThan => current.simd_lt(target_vector),
                            ScanCompareTypeImmediate::LessThanOrEqual => current.simd_le(target_vector),
                        };
                        mask_to_scan_vector::<$rust_type, LANES>(mask)
                    })))
                }
                ScanCompareType::Relative(kind) => Some(ScanFunctionVector::RelativeOrDelta(Box::new(move |current_pointer, previous_pointer| match kind {
                    ScanCompareTypeRelative::Changed | ScanCompareTypeRelative::Unchanged => {
                        let current_bits = unsafe { simd_load::<$bits_type, LANES>(current_pointer, false) };
                        let previous_bits = unsafe { simd_load::<$bits_type, LANES>(previous_pointer, false) };
                        let same = current_bits.simd_eq(previous_bits);
                        let mask = if matches!(kind, ScanCompareTypeRelative::Unchanged) { same } else { !same };
                        mask_to_scan_vector::<$bits_type, LANES>(mask)
                    }
                    ScanCompareTypeRelative::Increased | ScanCompareTypeRelative::Decreased => {
                        let current = unsafe { simd_load::<$rust_type, LANES>(current_pointer, NEEDS_SWAP) };
                        let previous = unsafe { simd_load::<$rust_type, LANES>(previous_pointer, NEEDS_SWAP) };
                        let mask = if matches!(kind, ScanCompareTypeRelative::Increased) { current.simd_gt(previous) } else { current.simd_lt(previous) };
                        mask_to_scan_vector::<$rust_type, LANES>(mask)
                    }
                }))),
                ScanCompareType::Delta(kind) => {
                    if matches!(
                        kind,
                        ScanCompareTypeDelta::ShiftLeftBy
                            | ScanCompareTypeDelta::ShiftRightBy
                            | ScanCompareTypeDelta::LogicalAndBy
                            | ScanCompareTypeDelta::LogicalOrBy
                            | ScanCompareTypeDelta::LogicalXorBy
                    ) {
                        return None;
                    }

                    let operand: $rust_type = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                    let tolerance = scan_constraint.get_floating_point_tolerance();
                    if matches!(kind, ScanCompareTypeDelta::DividedBy | ScanCompareTypeDelta::ModuloBy) && operand == 0.0 {
                        return None;
                    }
                    let operand_vector = Simd::<$rust_type, LANES>::splat(operand);

                    Some(ScanFunctionVector::RelativeOrDelta(Box::new(move |current_pointer, previous_pointer| {
                        let current = unsafe { simd_load::<$rust_type, LANES>(current_pointer, NEEDS_SWAP) };
                        let previous = unsafe { simd_load::<$rust_type, LANES>(previous_pointer, NEEDS_SWAP) };
                        let expected = match kind {
                            ScanCompareTypeDelta::IncreasedBy => previous + operand_vector,
                            ScanCompareTypeDelta::DecreasedBy => previous - operand_vector,
                            ScanCompareTypeDelta::MultipliedBy => previous * operand_vector,
                            ScanCompareTypeDelta::DividedBy => previous / operand_vector,
                            ScanCompareTypeDelta::ModuloBy => previous % operand_vector,
                            _ => unreachable!("bitwise/shift delta kinds are rejected above for floats"),
                        };
                        mask_to_scan_vector::<$rust_type, LANES>(Self::tolerant_eq_simd(current, expected, tolerance))
                    })))
                }
            }
        }
    };
}

/// Instantiates an exact-equality integer `DataType`: `i8`/`u8`/.../`i64`/`u64`, little- or
/// big-endian. Bitwise and shift delta kinds are supported; equality never applies a tolerance.
macro_rules! impl_integer_data_type {
    ($struct_name:ident, $data_type_id:expr, $icon_id:expr, $rust_type:ty, $endian:expr, $from_bytes:ident, $to_bytes:ident, $is_signed:expr, $lanes:expr) => {
        impl_numeric_data_type_scaffold!($struct_name, $data_type_id, $icon_id, $rust_type, $endian, $from_bytes, $to_bytes, false, $is_signed);

        impl crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable for $struct_name {
            fn get_compare_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) == target))
            }

            fn get_compare_not_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) != target))
            }

            fn get_compare_greater_than(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) > target))
            }

            fn get_compare_greater_than_or_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) >= target))
            }

            fn get_compare_less_than(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) < target))
            }

            fn get_compare_less_than_or_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) <= target))
            }

            fn get_compare_changed(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| unsafe {
                    std::slice::from_raw_parts(current, UNIT_SIZE as usize) != std::slice::from_raw_parts(previous, UNIT_SIZE as usize)
                }))
            }

            fn get_compare_unchanged(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| unsafe {
                    std::slice::from_raw_parts(current, UNIT_SIZE as usize) == std::slice::from_raw_parts(previous, UNIT_SIZE as usize)
                }))
            }

            fn get_compare_increased(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| Self::read(current) > Self::read(previous)))
            }

            fn get_compare_decreased(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| Self::read(current) < Self::read(previous)))
            }

            fn get_compare_increased_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let delta = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == Self::read(previous).wrapping_add(delta)))
            }

            fn get_compare_decreased_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let delta = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == Self::read(previous).wrapping_sub(delta)))
            }

            fn get_compare_multiplied_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let factor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == Self::read(previous).wrapping_mul(factor)))
            }

            fn get_compare_divided_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let divisor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| {
                    if divisor == 0 {
                        return false;
                    }
                    Self::read(current) == Self::read(previous).wrapping_div(divisor)
                }))
            }

            fn get_compare_modulo_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let divisor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| {
                    if divisor == 0 {
                        return false;
                    }
                    Self::read(current) == Self::read(previous).wrapping_rem(divisor)
                }))
            }

            fn get_compare_shift_left_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let shift = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == Self::read(previous).wrapping_shl(shift as u32)))
            }

            fn get_compare_shift_right_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let shift = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == Self::read(previous).wrapping_shr(shift as u32)))
            }

            fn get_compare_logical_and_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let operand = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == (Self::read(previous) & operand)))
            }

            fn get_compare_logical_or_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let operand = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == (Self::read(previous) | operand)))
            }

            fn get_compare_logical_xor_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let operand = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current, previous| Self::read(current) == (Self::read(previous) ^ operand)))
            }

            impl_integer_vector_dispatch!($struct_name, $rust_type, $endian, $lanes);
        }
    };
}

/// Instantiates a tolerance-equality float `DataType`: `f32`/`f64`, little- or big-endian.
/// Bitwise and shift delta kinds do not apply to floats and return `None`. `$bits_type` is the
/// unsigned integer of the same width (`u32` for `f32`, `u64` for `f64`), used only for the
/// bit-exact `Changed`/`Unchanged` vector comparisons.
macro_rules! impl_float_data_type {
    ($struct_name:ident, $data_type_id:expr, $icon_id:expr, $rust_type:ty, $endian:expr, $from_bytes:ident, $to_bytes:ident, $bits_type:ty, $lanes:expr) => {
        impl_numeric_data_type_scaffold!($struct_name, $data_type_id, $icon_id, $rust_type, $endian, $from_bytes, $to_bytes, true, true);

        impl $struct_name {
            fn tolerant_eq(
                a: $rust_type,
                b: $rust_type,
                floating_point_tolerance: crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance,
            ) -> bool {
                match floating_point_tolerance {
                    crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance::Exact => a == b,
                    crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance::Epsilon(_) => {
                        (a - b).abs() <= floating_point_tolerance.epsilon_f64() as $rust_type
                    }
                }
            }

            fn tolerant_eq_simd(
                a: std::simd::Simd<$rust_type, $lanes>,
                b: std::simd::Simd<$rust_type, $lanes>,
                floating_point_tolerance: crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance,
            ) -> std::simd::Mask<<$rust_type as std::simd::SimdElement>::Mask, $lanes> {
                use std::simd::cmp::SimdPartialEq;
                use std::simd::cmp::SimdPartialOrd;
                use std::simd::StdFloat;

                match floating_point_tolerance {
                    crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance::Exact => a.simd_eq(b),
                    crate::structures::data_types::floating_point_tolerance::FloatingPointTolerance::Epsilon(_) => {
                        let epsilon = std::simd::Simd::<$rust_type, $lanes>::splat(floating_point_tolerance.epsilon_f64() as $rust_type);
                        (a - b).abs().simd_le(epsilon)
                    }
                }
            }
        }

        impl crate::structures::data_types::comparisons::scalar_comparable::ScalarComparable for $struct_name {
            fn get_compare_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current| Self::tolerant_eq(Self::read(current), target, tolerance)))
            }

            fn get_compare_not_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current| !Self::tolerant_eq(Self::read(current), target, tolerance)))
            }

            fn get_compare_greater_than(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) > target))
            }

            fn get_compare_greater_than_or_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) >= target))
            }

            fn get_compare_less_than(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) < target))
            }

            fn get_compare_less_than_or_equal(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnImmediate> {
                let target = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                Some(Box::new(move |current| Self::read(current) <= target))
            }

            fn get_compare_changed(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| unsafe {
                    std::slice::from_raw_parts(current, UNIT_SIZE as usize) != std::slice::from_raw_parts(previous, UNIT_SIZE as usize)
                }))
            }

            fn get_compare_unchanged(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| unsafe {
                    std::slice::from_raw_parts(current, UNIT_SIZE as usize) == std::slice::from_raw_parts(previous, UNIT_SIZE as usize)
                }))
            }

            fn get_compare_increased(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| Self::read(current) > Self::read(previous)))
            }

            fn get_compare_decreased(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnRelative> {
                Some(Box::new(|current, previous| Self::read(current) < Self::read(previous)))
            }

            fn get_compare_increased_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let delta = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current, previous| Self::tolerant_eq(Self::read(current), Self::read(previous) + delta, tolerance)))
            }

            fn get_compare_decreased_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let delta = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current, previous| Self::tolerant_eq(Self::read(current), Self::read(previous) - delta, tolerance)))
            }

            fn get_compare_multiplied_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let factor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current, previous| Self::tolerant_eq(Self::read(current), Self::read(previous) * factor, tolerance)))
            }

            fn get_compare_divided_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let divisor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current, previous| {
                    if divisor == 0.0 {
                        return false;
                    }
                    Self::tolerant_eq(Self::read(current), Self::read(previous) / divisor, tolerance)
                }))
            }

            fn get_compare_modulo_by(&self, scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                let divisor = Self::read(scan_constraint.get_compare_value().get_value_bytes().as_ptr());
                let tolerance = scan_constraint.get_floating_point_tolerance();
                Some(Box::new(move |current, previous| {
                    if divisor == 0.0 {
                        return false;
                    }
                    Self::tolerant_eq(Self::read(current), Self::read(previous) % divisor, tolerance)
                }))
            }

            fn get_compare_shift_left_by(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                None
            }

            fn get_compare_shift_right_by(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                None
            }

            fn get_compare_logical_and_by(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                None
            }

            fn get_compare_logical_or_by(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                None
            }

            fn get_compare_logical_xor_by(&self, _scan_constraint: &crate::structures::scanning::constraints::scan_constraint::ScanConstraint) -> Option<crate::structures::scanning::comparisons::scan_function_scalar::ScalarCompareFnDelta> {
                None
            }

            impl_float_vector_dispatch!($struct_name, $rust_type, $bits_type, $endian, $lanes);
        }
    };
}

pub(crate) use impl_float_data_type;
pub(crate) use impl_float_vector_dispatch;
pub(crate) use impl_integer_data_type;
pub(crate) use impl_integer_vector_dispatch;
pub(crate) use impl_numeric_data_type_scaffold;
