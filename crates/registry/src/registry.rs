use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::{ConfigDump, ConfigEntry, FieldDescriptor, RegistryBuilder};

/// Largest edit distance at which [`Registry::suggest`] offers a name.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// The initialized, structurally frozen set of configuration fields.
///
/// Produced by [`RegistryBuilder::init`]. All methods take `&self`; share it
/// between threads behind an `Arc` or a reference.
pub struct Registry {
	fields: IndexMap<String, FieldDescriptor>,
	snapshot: bool,
}

impl Registry {
	pub(crate) fn new(fields: IndexMap<String, FieldDescriptor>, snapshot: bool) -> Self {
		Self { fields, snapshot }
	}

	/// Starts a registration pass.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	pub fn lookup(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.get(name)
	}

	/// Iterates fields in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.fields.values()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Changes a mutable field from its string form.
	///
	/// Checks run in order: the name must exist ([`ConfigError::NotFound`]),
	/// the field must be mutable ([`ConfigError::NotSupported`]), and the value
	/// must parse and validate ([`ConfigError::InvalidArgument`]). On success
	/// the new value is visible to every later read on any thread; on failure
	/// the field is unchanged.
	pub fn set_config(&self, name: &str, value: &str) -> Result<()> {
		let Some(field) = self.fields.get(name) else {
			let suggestion = self.suggest(name);
			tracing::warn!(name, ?suggestion, "config update rejected: unknown field");
			return Err(ConfigError::NotFound { name: name.to_string() });
		};

		if !field.is_mutable() {
			tracing::warn!(name, value, "config update rejected: field is immutable");
			return Err(ConfigError::NotSupported { name: name.to_string() });
		}

		let previous = field.current_value();
		if let Err(source) = field.assign(value) {
			tracing::warn!(name, value, error = %source, "config update rejected: invalid value");
			return Err(ConfigError::InvalidArgument {
				name: name.to_string(),
				source,
			});
		}

		tracing::info!(name, previous = %previous, value, "config updated");
		Ok(())
	}

	/// Describes every field in declaration order.
	pub fn list_configs(&self) -> Vec<ConfigEntry> {
		self.fields.values().map(ConfigEntry::from).collect()
	}

	/// Renders the current value of every field in declaration order.
	///
	/// Returns `None` unless the registry was initialized with
	/// `populate_snapshot`. Values are read at call time.
	pub fn dump(&self) -> Option<ConfigDump> {
		self.snapshot.then(|| ConfigDump::capture(self.fields.values()))
	}

	/// Returns the registered name closest to `name`, if one is close enough.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		closest_name(self.fields.keys(), name)
	}
}

impl core::fmt::Debug for Registry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registry")
			.field("fields", &self.fields.len())
			.field("snapshot", &self.snapshot)
			.finish()
	}
}

pub(crate) fn closest_name<'a>(names: impl Iterator<Item = &'a String>, name: &str) -> Option<&'a str> {
	names
		.map(|candidate| (strsim::levenshtein(name, candidate), candidate.as_str()))
		.filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
		.min_by_key(|(distance, _)| *distance)
		.map(|(_, candidate)| candidate)
}
