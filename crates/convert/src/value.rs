//! Typed and dynamic conversion entry points.

use crate::scalar::{parse_bool, parse_double, parse_int, render_bool, render_double};
use crate::{ConvertError, ElementType, FieldType, LIST_SEPARATOR, Result, split_list};

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Bool(bool),
	Int16(i16),
	Int32(i32),
	Int64(i64),
	Double(f64),
	String(String),
	List(ElementType, Vec<Value>),
}

impl Value {
	/// Returns the field type this value belongs to.
	pub fn field_type(&self) -> FieldType {
		match self {
			Value::Bool(_) => FieldType::Bool,
			Value::Int16(_) => FieldType::Int16,
			Value::Int32(_) => FieldType::Int32,
			Value::Int64(_) => FieldType::Int64,
			Value::Double(_) => FieldType::Double,
			Value::String(_) => FieldType::String,
			Value::List(element, _) => FieldType::List(*element),
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns any integer variant widened to `i64`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int16(v) => Some(i64::from(*v)),
			Value::Int32(v) => Some(i64::from(*v)),
			Value::Int64(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_double(&self) -> Option<f64> {
		match self {
			Value::Double(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(_, items) => Some(items),
			_ => None,
		}
	}
}

/// Parses `input` as a value of type `ty`.
///
/// A list fails as a whole when any of its elements fails.
pub fn parse(ty: FieldType, input: &str) -> Result<Value> {
	match ty {
		FieldType::Bool => <bool as Convert>::parse(input).map(Value::Bool),
		FieldType::Int16 => <i16 as Convert>::parse(input).map(Value::Int16),
		FieldType::Int32 => <i32 as Convert>::parse(input).map(Value::Int32),
		FieldType::Int64 => <i64 as Convert>::parse(input).map(Value::Int64),
		FieldType::Double => <f64 as Convert>::parse(input).map(Value::Double),
		FieldType::String => <String as Convert>::parse(input).map(Value::String),
		FieldType::List(element) => split_list(input)
			.map(|item| parse(element.into(), item))
			.collect::<Result<Vec<_>>>()
			.map(|items| Value::List(element, items))
			.map_err(|_| ConvertError::new(input, ty)),
	}
}

/// Renders `value` in canonical form.
pub fn render(value: &Value) -> String {
	match value {
		Value::Bool(v) => v.render(),
		Value::Int16(v) => v.render(),
		Value::Int32(v) => v.render(),
		Value::Int64(v) => v.render(),
		Value::Double(v) => v.render(),
		Value::String(v) => v.clone(),
		Value::List(_, items) => items.iter().map(render).collect::<Vec<_>>().join(LIST_SEPARATOR),
	}
}

/// Conversion between a Rust type and its configuration string form.
pub trait Convert: Sized {
	/// Field type tag for this Rust type.
	const FIELD_TYPE: FieldType;

	fn parse(input: &str) -> Result<Self>;

	fn render(&self) -> String;

	fn to_value(&self) -> Value;
}

/// Types allowed as list elements.
pub trait Element: Convert {
	const ELEMENT_TYPE: ElementType;
}

impl Convert for bool {
	const FIELD_TYPE: FieldType = FieldType::Bool;

	fn parse(input: &str) -> Result<Self> {
		parse_bool(input)
	}

	fn render(&self) -> String {
		render_bool(*self)
	}

	fn to_value(&self) -> Value {
		Value::Bool(*self)
	}
}

macro_rules! impl_convert_int {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Convert for $ty {
				const FIELD_TYPE: FieldType = FieldType::$variant;

				fn parse(input: &str) -> Result<Self> {
					parse_int(input, Self::FIELD_TYPE)
				}

				fn render(&self) -> String {
					self.to_string()
				}

				fn to_value(&self) -> Value {
					Value::$variant(*self)
				}
			}

			impl Element for $ty {
				const ELEMENT_TYPE: ElementType = ElementType::$variant;
			}
		)*
	};
}

impl_convert_int!(i16 => Int16, i32 => Int32, i64 => Int64);

impl Convert for f64 {
	const FIELD_TYPE: FieldType = FieldType::Double;

	fn parse(input: &str) -> Result<Self> {
		parse_double(input)
	}

	fn render(&self) -> String {
		render_double(*self)
	}

	fn to_value(&self) -> Value {
		Value::Double(*self)
	}
}

impl Convert for String {
	const FIELD_TYPE: FieldType = FieldType::String;

	fn parse(input: &str) -> Result<Self> {
		Ok(input.to_string())
	}

	fn render(&self) -> String {
		self.clone()
	}

	fn to_value(&self) -> Value {
		Value::String(self.clone())
	}
}

impl Element for bool {
	const ELEMENT_TYPE: ElementType = ElementType::Bool;
}

impl Element for f64 {
	const ELEMENT_TYPE: ElementType = ElementType::Double;
}

impl Element for String {
	const ELEMENT_TYPE: ElementType = ElementType::String;
}

impl<T: Element> Convert for Vec<T> {
	const FIELD_TYPE: FieldType = FieldType::List(T::ELEMENT_TYPE);

	fn parse(input: &str) -> Result<Self> {
		split_list(input)
			.map(T::parse)
			.collect::<Result<Vec<_>>>()
			.map_err(|_| ConvertError::new(input, Self::FIELD_TYPE))
	}

	fn render(&self) -> String {
		self.iter().map(T::render).collect::<Vec<_>>().join(LIST_SEPARATOR)
	}

	fn to_value(&self) -> Value {
		Value::List(T::ELEMENT_TYPE, self.iter().map(T::to_value).collect())
	}
}
