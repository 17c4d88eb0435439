use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use tunables_registry::Mutability::{Immutable, Mutable};
use tunables_registry::{ConvertError, FieldType, InitError, OverrideSource, RegistryBuilder, ValueError};

#[test]
fn overrides_replace_defaults() {
	let mut builder = RegistryBuilder::new();
	let port = builder.declare::<i32>("cfg_port", Immutable, "8030");
	let name = builder.declare::<String>("cfg_name", Mutable, "fe");
	let dirs = builder.declare::<Vec<String>>("cfg_dirs", Immutable, "/a");

	let overrides = HashMap::from([
		("cfg_port".to_string(), "9030".to_string()),
		("cfg_dirs".to_string(), "/x, /y".to_string()),
		("cfg_unknown".to_string(), "ignored".to_string()),
	]);
	let registry = builder.init(Some(&overrides), true).unwrap();

	assert_eq!(port.get(), 9030);
	assert_eq!(name.get(), "fe");
	assert_eq!(dirs.get(), vec!["/x".to_string(), "/y".to_string()]);

	let port_entry = registry.lookup("cfg_port").unwrap();
	assert_eq!(port_entry.default_value(), "8030");
	assert_eq!(port_entry.current_value(), "9030");
	assert!(registry.lookup("cfg_unknown").is_none());
}

#[test]
fn every_map_kind_is_an_override_source() {
	let hash = HashMap::from([("k".to_string(), "1".to_string())]);
	let btree = BTreeMap::from([("k".to_string(), "2".to_string())]);
	let index: IndexMap<String, String> = IndexMap::from([("k".to_string(), "3".to_string())]);
	let pairs = [("k", "4"), ("k", "5")];

	let sources: [&dyn OverrideSource; 4] = [&hash, &btree, &index, &pairs];
	let seen: Vec<_> = sources.iter().map(|source| source.lookup("k")).collect();
	assert_eq!(seen, [Some("1"), Some("2"), Some("3"), Some("5")]);
	assert_eq!(pairs.lookup("missing"), None);
}

#[test]
fn malformed_default_fails_init() {
	let mut builder = RegistryBuilder::new();
	builder.declare::<i32>("cfg_ok", Immutable, "1");
	builder.declare::<i16>("cfg_bad", Immutable, "65536");

	let err = builder.init(None, true).unwrap_err();
	assert!(matches!(&err, InitError::InvalidDefault { name, .. } if name == "cfg_bad"));
	assert_eq!(err.to_string(), "invalid default for 'cfg_bad': convert '65536' as int16 failed");
}

#[test]
fn malformed_default_fails_even_when_overridden() {
	let mut builder = RegistryBuilder::new();
	builder.declare::<bool>("cfg_flag", Mutable, "maybe");

	let err = builder.init(Some(&[("cfg_flag", "true")]), false).unwrap_err();
	assert!(matches!(err, InitError::InvalidDefault { .. }));
}

#[test]
fn malformed_override_fails_init() {
	let mut builder = RegistryBuilder::new();
	let ratio = builder.declare::<f64>("cfg_ratio", Mutable, "0.75");

	let err = builder.init(Some(&[("cfg_ratio", "three quarters")]), false).unwrap_err();
	assert_eq!(
		err,
		InitError::InvalidOverride {
			name: "cfg_ratio".into(),
			source: ValueError::Convert(ConvertError::new("three quarters", FieldType::Double)),
		}
	);
	assert_eq!(ratio.get(), 0.0);
}

#[test]
fn validator_applies_to_defaults_and_overrides() {
	fn non_empty(value: &String) -> Result<(), String> {
		if value.is_empty() { Err("must not be empty".to_string()) } else { Ok(()) }
	}

	let mut builder = RegistryBuilder::new();
	builder.declare_validated::<String>("cfg_cluster", Immutable, "", non_empty);
	let err = builder.init(None, false).unwrap_err();
	assert_eq!(
		err,
		InitError::InvalidDefault {
			name: "cfg_cluster".into(),
			source: ValueError::Rejected {
				input: String::new(),
				reason: "must not be empty".into(),
			},
		}
	);

	let mut builder = RegistryBuilder::new();
	let cluster = builder.declare_validated::<String>("cfg_cluster", Immutable, "main", non_empty);
	let err = builder.init(Some(&[("cfg_cluster", "")]), false).unwrap_err();
	assert!(matches!(err, InitError::InvalidOverride { .. }));
	assert_eq!(cluster.get(), "");
}

#[test]
fn empty_registry_initializes() {
	let registry = RegistryBuilder::new().init(None, true).unwrap();
	assert!(registry.is_empty());
	assert!(registry.list_configs().is_empty());
	assert_eq!(registry.dump().unwrap().to_string(), "");
}
