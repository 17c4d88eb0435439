//! Copied-out views of the registry.

use core::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tunables_convert::FieldType;

use crate::FieldDescriptor;

/// Point-in-time description of one field, as returned by
/// [`Registry::list_configs`](crate::Registry::list_configs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
	pub name: String,
	/// Current value in canonical form.
	pub value: String,
	/// Default as declared.
	pub default: String,
	pub mutable: bool,
	#[serde(rename = "type")]
	pub field_type: FieldType,
}

impl From<&FieldDescriptor> for ConfigEntry {
	fn from(field: &FieldDescriptor) -> Self {
		Self {
			name: field.name().to_string(),
			value: field.current_value(),
			default: field.default_value().to_string(),
			mutable: field.is_mutable(),
			field_type: field.field_type(),
		}
	}
}

/// Ordered `name -> current value` export of every field.
///
/// `Display` writes one `name=value` line per field in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDump(IndexMap<String, String>);

impl ConfigDump {
	pub(crate) fn capture<'a>(fields: impl Iterator<Item = &'a FieldDescriptor>) -> Self {
		Self(fields.map(|field| (field.name().to_string(), field.current_value())).collect())
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_inner(self) -> IndexMap<String, String> {
		self.0
	}
}

impl fmt::Display for ConfigDump {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (name, value) in &self.0 {
			writeln!(f, "{name}={value}")?;
		}
		Ok(())
	}
}
