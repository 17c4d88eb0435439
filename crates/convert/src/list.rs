/// Separator used when rendering list values.
pub const LIST_SEPARATOR: &str = ", ";

/// Splits a list literal into trimmed elements.
///
/// Blank input is the empty list; otherwise every comma delimits an element,
/// so `"a,,b"` has an empty middle element.
pub fn split_list(input: &str) -> impl Iterator<Item = &str> {
	let blank = input.trim().is_empty();
	input
		.split(',')
		.filter(move |_| !blank)
		.map(str::trim)
}
