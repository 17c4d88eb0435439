use core::fmt;

/// Element type of a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
	Bool,
	Int16,
	Int32,
	Int64,
	Double,
	String,
}

impl ElementType {
	/// Returns the display name of this element type.
	pub const fn name(self) -> &'static str {
		match self {
			ElementType::Bool => "bool",
			ElementType::Int16 => "int16",
			ElementType::Int32 => "int32",
			ElementType::Int64 => "int64",
			ElementType::Double => "double",
			ElementType::String => "string",
		}
	}
}

/// The declared type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
	Bool,
	Int16,
	Int32,
	Int64,
	Double,
	String,
	/// Comma separated list of a scalar or string element type.
	List(ElementType),
}

impl FieldType {
	/// Returns the list element type, or `None` for non-list fields.
	pub const fn element(self) -> Option<ElementType> {
		match self {
			FieldType::List(element) => Some(element),
			_ => None,
		}
	}

	/// Returns `true` for types whose value fits in a single atomic word.
	pub const fn is_scalar(self) -> bool {
		matches!(
			self,
			FieldType::Bool | FieldType::Int16 | FieldType::Int32 | FieldType::Int64 | FieldType::Double
		)
	}
}

impl From<ElementType> for FieldType {
	fn from(element: ElementType) -> Self {
		match element {
			ElementType::Bool => FieldType::Bool,
			ElementType::Int16 => FieldType::Int16,
			ElementType::Int32 => FieldType::Int32,
			ElementType::Int64 => FieldType::Int64,
			ElementType::Double => FieldType::Double,
			ElementType::String => FieldType::String,
		}
	}
}

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldType::Bool => f.write_str("bool"),
			FieldType::Int16 => f.write_str("int16"),
			FieldType::Int32 => f.write_str("int32"),
			FieldType::Int64 => f.write_str("int64"),
			FieldType::Double => f.write_str("double"),
			FieldType::String => f.write_str("string"),
			FieldType::List(element) => write!(f, "list<{element}>"),
		}
	}
}

impl serde::Serialize for FieldType {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
