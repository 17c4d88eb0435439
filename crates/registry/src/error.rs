//! Error types for registration, initialization and runtime mutation.

use tunables_convert::ConvertError;

/// A string was rejected as the value of a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
	/// The string does not parse as the field's declared type.
	#[error(transparent)]
	Convert(#[from] ConvertError),

	/// The string parsed, but the field's validator refused the value.
	#[error("value '{input}' rejected: {reason}")]
	Rejected {
		/// The rejected input, verbatim.
		input: String,
		/// Reason reported by the validator.
		reason: String,
	},
}

/// Category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	NotFound,
	NotSupported,
	InvalidArgument,
}

/// Errors returned by [`Registry::set_config`](crate::Registry::set_config).
///
/// A failed call never changes the field's value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// No field with this name is registered.
	#[error("not found: '{name}' is not found")]
	NotFound { name: String },

	/// The field exists but was not declared mutable.
	#[error("not supported: '{name}' is not mutable")]
	NotSupported { name: String },

	/// The new value does not parse or does not validate.
	#[error("invalid argument: {source}")]
	InvalidArgument { name: String, source: ValueError },
}

impl ConfigError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			ConfigError::NotFound { .. } => ErrorKind::NotFound,
			ConfigError::NotSupported { .. } => ErrorKind::NotSupported,
			ConfigError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
		}
	}

	/// Returns the field name the failed call referred to.
	pub fn name(&self) -> &str {
		match self {
			ConfigError::NotFound { name } | ConfigError::NotSupported { name } | ConfigError::InvalidArgument { name, .. } => name,
		}
	}
}

/// Errors that abort [`RegistryBuilder::init`](crate::RegistryBuilder::init).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
	/// A compiled-in default is malformed.
	#[error("invalid default for '{name}': {source}")]
	InvalidDefault { name: String, source: ValueError },

	/// An externally supplied override is malformed.
	#[error("invalid override for '{name}': {source}")]
	InvalidOverride { name: String, source: ValueError },
}

/// Structural registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two declarations share a name.
	#[error("duplicate field: '{name}' is already registered")]
	DuplicateField { name: String },
}

/// Result type for runtime configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
