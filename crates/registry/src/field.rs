use std::sync::Arc;

use tunables_convert::{Convert, FieldType, Value};

use crate::cell::{Storable, ValueCell};
use crate::error::ValueError;

/// Custom check run after a value parses, before it is stored.
pub type Validator<T> = fn(&T) -> Result<(), String>;

/// Whether a field may change after initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
	/// Written once by `init`, read-only afterwards.
	Immutable,
	/// May be replaced at runtime through `set_config`.
	Mutable,
}

impl Mutability {
	pub fn is_mutable(self) -> bool {
		self == Mutability::Mutable
	}
}

/// Typed storage for one field.
struct Slot<T: Storable> {
	cell: T::Cell,
	validator: Option<Validator<T>>,
}

impl<T: Storable> Slot<T> {
	fn parse(&self, input: &str) -> Result<T, ValueError> {
		let value = T::parse(input)?;
		if let Some(validator) = self.validator {
			validator(&value).map_err(|reason| ValueError::Rejected {
				input: input.to_string(),
				reason,
			})?;
		}
		Ok(value)
	}
}

/// Type-erased view of a [`Slot`], held by the registry.
pub(crate) trait FieldStorage: Send + Sync {
	fn field_type(&self) -> FieldType;

	/// Parses and validates `input` without storing it.
	fn check(&self, input: &str) -> Result<(), ValueError>;

	/// Parses, validates and stores `input`; leaves the value untouched on error.
	fn assign(&self, input: &str) -> Result<(), ValueError>;

	fn render(&self) -> String;

	fn value(&self) -> Value;
}

impl<T: Storable> FieldStorage for Slot<T> {
	fn field_type(&self) -> FieldType {
		T::FIELD_TYPE
	}

	fn check(&self, input: &str) -> Result<(), ValueError> {
		self.parse(input).map(drop)
	}

	fn assign(&self, input: &str) -> Result<(), ValueError> {
		let value = self.parse(input)?;
		self.cell.store(value);
		Ok(())
	}

	fn render(&self) -> String {
		self.cell.load().render()
	}

	fn value(&self) -> Value {
		self.cell.load().to_value()
	}
}

/// Typed read handle for a declared field.
///
/// Cheap to clone and safe to read from any thread. Before `init` runs the
/// handle reads the type's zero value.
pub struct Conf<T: Storable> {
	slot: Arc<Slot<T>>,
}

impl<T: Storable> Conf<T> {
	fn new(validator: Option<Validator<T>>) -> Self {
		Self {
			slot: Arc::new(Slot {
				cell: T::Cell::default(),
				validator,
			}),
		}
	}

	/// Returns the current value.
	#[inline]
	pub fn get(&self) -> T {
		self.slot.cell.load()
	}
}

impl<T: Storable> Clone for Conf<T> {
	fn clone(&self) -> Self {
		Self {
			slot: Arc::clone(&self.slot),
		}
	}
}

impl<T: Storable + core::fmt::Debug> core::fmt::Debug for Conf<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("Conf").field(&self.get()).finish()
	}
}

/// Metadata and storage for one named field.
pub struct FieldDescriptor {
	name: String,
	mutability: Mutability,
	default: String,
	storage: Arc<dyn FieldStorage>,
}

impl FieldDescriptor {
	/// Creates a descriptor together with the typed handle that reads it.
	pub fn new<T: Storable>(name: impl Into<String>, mutability: Mutability, default: impl Into<String>) -> (Self, Conf<T>) {
		Self::build(name.into(), mutability, default.into(), None)
	}

	/// Like [`new`](Self::new), with a validator applied to every value.
	pub fn with_validator<T: Storable>(
		name: impl Into<String>,
		mutability: Mutability,
		default: impl Into<String>,
		validator: Validator<T>,
	) -> (Self, Conf<T>) {
		Self::build(name.into(), mutability, default.into(), Some(validator))
	}

	fn build<T: Storable>(name: String, mutability: Mutability, default: String, validator: Option<Validator<T>>) -> (Self, Conf<T>) {
		let conf = Conf::new(validator);
		let storage: Arc<dyn FieldStorage> = conf.slot.clone();
		let descriptor = Self {
			name,
			mutability,
			default,
			storage,
		};
		(descriptor, conf)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn field_type(&self) -> FieldType {
		self.storage.field_type()
	}

	pub fn mutability(&self) -> Mutability {
		self.mutability
	}

	pub fn is_mutable(&self) -> bool {
		self.mutability.is_mutable()
	}

	/// Returns the compiled-in default string, as declared.
	pub fn default_value(&self) -> &str {
		&self.default
	}

	/// Renders the current value in canonical form.
	pub fn current_value(&self) -> String {
		self.storage.render()
	}

	/// Returns the current value as a dynamically typed [`Value`].
	pub fn value(&self) -> Value {
		self.storage.value()
	}

	pub(crate) fn check(&self, input: &str) -> Result<(), ValueError> {
		self.storage.check(input)
	}

	pub(crate) fn assign(&self, input: &str) -> Result<(), ValueError> {
		self.storage.assign(input)
	}
}

impl core::fmt::Debug for FieldDescriptor {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("type", &self.field_type())
			.field("mutability", &self.mutability)
			.field("default", &self.default)
			.finish()
	}
}
