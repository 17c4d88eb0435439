//! Registration phase.
//!
//! Declaring modules expose a `register(&mut RegistryBuilder)` function (see
//! [`config_fields!`](crate::config_fields)); the startup sequence calls each
//! of them on one builder and then [`RegistryBuilder::init`] turns it into the
//! shared [`Registry`].

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{InitError, RegistryError, ValueError};
use crate::registry::closest_name;
use crate::{Conf, FieldDescriptor, Mutability, OverrideSource, Registry, Storable, Validator};

/// Collects field declarations before initialization.
#[derive(Default)]
pub struct RegistryBuilder {
	fields: IndexMap<String, FieldDescriptor>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a field and returns its typed handle.
	///
	/// # Panics
	///
	/// Panics if `name` is already registered.
	pub fn declare<T: Storable>(&mut self, name: &str, mutability: Mutability, default: &str) -> Conf<T> {
		let (field, conf) = FieldDescriptor::new::<T>(name, mutability, default);
		self.register(field);
		conf
	}

	/// Declares a field whose values must also pass `validator`.
	///
	/// # Panics
	///
	/// Panics if `name` is already registered.
	pub fn declare_validated<T: Storable>(
		&mut self,
		name: &str,
		mutability: Mutability,
		default: &str,
		validator: Validator<T>,
	) -> Conf<T> {
		let (field, conf) = FieldDescriptor::with_validator::<T>(name, mutability, default, validator);
		self.register(field);
		conf
	}

	/// Adds a field.
	///
	/// # Panics
	///
	/// Panics on a duplicate name: two declarations colliding is a programming
	/// error that must stop startup.
	pub fn register(&mut self, field: FieldDescriptor) {
		if let Err(err) = self.try_register(field) {
			panic!("{err}");
		}
	}

	/// Adds a field, reporting a duplicate name instead of panicking.
	pub fn try_register(&mut self, field: FieldDescriptor) -> Result<(), RegistryError> {
		match self.fields.entry(field.name().to_string()) {
			Entry::Occupied(existing) => Err(RegistryError::DuplicateField {
				name: existing.key().clone(),
			}),
			Entry::Vacant(slot) => {
				slot.insert(field);
				Ok(())
			}
		}
	}

	pub fn lookup(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.get(name)
	}

	/// Removes every declaration. Only meant for isolating tests.
	pub fn clear(&mut self) {
		self.fields.clear();
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Returns the declared name closest to `name`, if one is close enough.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		closest_name(self.fields.keys(), name)
	}

	/// Assigns every field its initial value and freezes the registry.
	///
	/// Fields are visited in declaration order. A field takes its override
	/// from `overrides` when one exists, otherwise its default. Defaults are
	/// always parsed, so a malformed default fails even when overridden. The
	/// first failure aborts the whole call.
	///
	/// `populate_snapshot` enables [`Registry::dump`] and logs the effective
	/// configuration.
	pub fn init(self, overrides: Option<&dyn OverrideSource>, populate_snapshot: bool) -> Result<Registry, InitError> {
		let mut overridden = 0usize;

		for field in self.fields.values() {
			let name = field.name();
			let invalid_default = |source: ValueError| InitError::InvalidDefault {
				name: name.to_string(),
				source,
			};

			match overrides.and_then(|overrides| overrides.lookup(name)) {
				Some(value) => {
					field.check(field.default_value()).map_err(invalid_default)?;
					field.assign(value).map_err(|source| InitError::InvalidOverride {
						name: name.to_string(),
						source,
					})?;
					overridden += 1;
					tracing::debug!(name, value, default = field.default_value(), "config field overridden");
				}
				None => field.assign(field.default_value()).map_err(invalid_default)?,
			}
		}

		let registry = Registry::new(self.fields, populate_snapshot);
		tracing::info!(fields = registry.len(), overridden, "config registry initialized");

		if let Some(dump) = registry.dump() {
			for (name, value) in dump.iter() {
				tracing::debug!(name, value, "effective config");
			}
		}

		Ok(registry)
	}
}

impl core::fmt::Debug for RegistryBuilder {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RegistryBuilder")
			.field("fields", &self.fields.keys().collect::<Vec<_>>())
			.finish()
	}
}
