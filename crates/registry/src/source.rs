//! Override values supplied at initialization.
//!
//! Reading overrides from files, command lines or the environment happens
//! elsewhere; the registry only consumes the resulting name to string mapping.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// A name to string mapping consulted once per field during `init`.
pub trait OverrideSource {
	/// Returns the override for `name`, if any.
	fn lookup(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> OverrideSource for HashMap<String, String, S> {
	fn lookup(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl<S: BuildHasher> OverrideSource for IndexMap<String, String, S> {
	fn lookup(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl OverrideSource for BTreeMap<String, String> {
	fn lookup(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

/// Later pairs win over earlier ones with the same name.
impl<const N: usize> OverrideSource for [(&str, &str); N] {
	fn lookup(&self, name: &str) -> Option<&str> {
		self.iter().rev().find(|(key, _)| *key == name).map(|(_, value)| *value)
	}
}
