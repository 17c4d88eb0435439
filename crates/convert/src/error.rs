//! Conversion errors.

use crate::FieldType;

/// A string could not be converted to the requested field type.
///
/// For lists the whole input is reported, even when a single element was at
/// fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("convert '{input}' as {target} failed")]
pub struct ConvertError {
	/// The rejected input, verbatim.
	pub input: String,
	/// The type the input was converted to.
	pub target: FieldType,
}

impl ConvertError {
	pub fn new(input: impl Into<String>, target: FieldType) -> Self {
		Self {
			input: input.into(),
			target,
		}
	}
}

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, ConvertError>;
