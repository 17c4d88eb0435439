//! Scalar parsing and rendering.

use core::str::FromStr;

use crate::{ConvertError, FieldType, Result};

/// Significant digits used when rendering doubles.
pub const DOUBLE_SIGNIFICANT_DIGITS: usize = 6;

/// Parses a boolean.
///
/// Accepts `true`/`false` in any case, and `1`/`0` so that rendered values
/// parse back.
pub fn parse_bool(input: &str) -> Result<bool> {
	if input == "1" || input.eq_ignore_ascii_case("true") {
		Ok(true)
	} else if input == "0" || input.eq_ignore_ascii_case("false") {
		Ok(false)
	} else {
		Err(ConvertError::new(input, FieldType::Bool))
	}
}

/// Parses an integer that must fit the width of `T`.
///
/// Out-of-range literals are rejected rather than truncated.
pub fn parse_int<T: FromStr>(input: &str, target: FieldType) -> Result<T> {
	input.parse::<T>().map_err(|_| ConvertError::new(input, target))
}

/// Parses a double using standard decimal notation.
pub fn parse_double(input: &str) -> Result<f64> {
	input
		.parse::<f64>()
		.map_err(|_| ConvertError::new(input, FieldType::Double))
}

pub fn render_bool(value: bool) -> String {
	String::from(if value { "1" } else { "0" })
}

/// Renders a double with [`DOUBLE_SIGNIFICANT_DIGITS`] significant digits.
///
/// Fixed notation is used for decimal exponents in `[-4, 6)`, exponent
/// notation (`1.5e+07`) otherwise. Trailing fractional zeros are dropped, so
/// `123.4567` renders as `123.457` and `2.50` as `2.5`.
pub fn render_double(value: f64) -> String {
	if value.is_nan() {
		return "nan".to_string();
	}
	if value.is_infinite() {
		return if value > 0.0 { "inf" } else { "-inf" }.to_string();
	}
	if value == 0.0 {
		return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
	}

	let precision = DOUBLE_SIGNIFICANT_DIGITS - 1;
	let exponent_form = format!("{value:.precision$e}");
	let Some((mantissa, exponent)) = exponent_form.split_once('e') else {
		return exponent_form;
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return exponent_form;
	};

	if exponent < -4 || exponent >= DOUBLE_SIGNIFICANT_DIGITS as i32 {
		let sign = if exponent < 0 { '-' } else { '+' };
		format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
	} else {
		let decimals = (precision as i32 - exponent) as usize;
		trim_fraction(&format!("{value:.decimals$}")).to_string()
	}
}

fn trim_fraction(number: &str) -> &str {
	if number.contains('.') {
		number.trim_end_matches('0').trim_end_matches('.')
	} else {
		number
	}
}
