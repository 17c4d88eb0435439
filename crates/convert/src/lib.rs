//! String conversion for configuration field values.
//!
//! Every configuration field is declared with a default string and may later be
//! changed from a string supplied at runtime. This crate owns the rules for
//! turning those strings into typed values and back:
//!
//! - [`Convert`] is the typed entry point, implemented for `bool`, `i16`,
//!   `i32`, `i64`, `f64`, `String` and `Vec<T>` of any of those.
//! - [`parse`] and [`render`] are the dynamic entry points, driven by a
//!   [`FieldType`] tag and producing a [`Value`].
//!
//! Rendering is canonical: booleans render as `1`/`0`, doubles with six
//! significant digits, and lists are always joined with `", "` regardless of
//! how the input was separated.
//!
//! Nothing in this crate holds state.

mod error;
mod list;
mod scalar;
mod types;
mod value;

pub use error::{ConvertError, Result};
pub use list::{LIST_SEPARATOR, split_list};
pub use scalar::{DOUBLE_SIGNIFICANT_DIGITS, parse_bool, parse_double, parse_int, render_bool, render_double};
pub use types::{ElementType, FieldType};
pub use value::{Convert, Element, Value, parse, render};
