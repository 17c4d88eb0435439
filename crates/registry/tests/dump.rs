use pretty_assertions::assert_eq;
use tunables_registry::Mutability::{Immutable, Mutable};
use tunables_registry::{Registry, RegistryBuilder};

fn every_type(builder: &mut RegistryBuilder) {
	builder.declare::<bool>("cfg_bool_false", Immutable, "false");
	builder.declare::<bool>("cfg_bool_true", Immutable, "true");
	builder.declare::<f64>("cfg_double", Immutable, "123.456");
	builder.declare::<i16>("cfg_int16_t", Immutable, "2561");
	builder.declare::<i32>("cfg_int32_t", Immutable, "65536123");
	builder.declare::<i64>("cfg_int64_t", Immutable, "4294967296123");
	builder.declare::<String>("cfg_std_string", Immutable, "starrocks_config_test_string");
	builder.declare::<Vec<bool>>("cfg_std_vector_bool", Immutable, "true,false,true");
	builder.declare::<Vec<f64>>("cfg_std_vector_double", Immutable, "123.456,123.4567,123.45678");
	builder.declare::<Vec<i16>>("cfg_std_vector_int16_t", Immutable, "2561,2562,2563");
	builder.declare::<Vec<i32>>("cfg_std_vector_int32_t", Immutable, "65536123,65536234,65536345");
	builder.declare::<Vec<i64>>(
		"cfg_std_vector_int64_t",
		Immutable,
		"4294967296123,4294967296234,4294967296345",
	);
	builder.declare::<Vec<String>>("cfg_std_vector_std_string", Immutable, "starrocks,config,test,string");
}

fn init_every_type() -> Registry {
	let mut builder = RegistryBuilder::new();
	every_type(&mut builder);
	builder.init(None, true).unwrap()
}

#[test]
fn dump_renders_every_type_in_declaration_order() {
	let registry = init_every_type();
	let dump = registry.dump().unwrap();

	assert_eq!(
		dump.to_string(),
		"cfg_bool_false=0\n\
		 cfg_bool_true=1\n\
		 cfg_double=123.456\n\
		 cfg_int16_t=2561\n\
		 cfg_int32_t=65536123\n\
		 cfg_int64_t=4294967296123\n\
		 cfg_std_string=starrocks_config_test_string\n\
		 cfg_std_vector_bool=1, 0, 1\n\
		 cfg_std_vector_double=123.456, 123.457, 123.457\n\
		 cfg_std_vector_int16_t=2561, 2562, 2563\n\
		 cfg_std_vector_int32_t=65536123, 65536234, 65536345\n\
		 cfg_std_vector_int64_t=4294967296123, 4294967296234, 4294967296345\n\
		 cfg_std_vector_std_string=starrocks, config, test, string\n"
	);
}

#[test]
fn dump_scenario_lines() {
	let mut builder = RegistryBuilder::new();
	builder.declare::<bool>("cfg_bool_false", Immutable, "false");
	builder.declare::<i32>("cfg_int32_t", Immutable, "65536123");
	let registry = builder.init(None, true).unwrap();

	let rendered = registry.dump().unwrap().to_string();
	let lines: Vec<_> = rendered.lines().collect();
	assert_eq!(lines, ["cfg_bool_false=0", "cfg_int32_t=65536123"]);
}

#[test]
fn dump_is_deterministic() {
	let registry = init_every_type();
	let first = registry.dump().unwrap();
	let second = registry.dump().unwrap();

	assert_eq!(first, second);
	assert_eq!(first.to_string(), second.to_string());

	let names: Vec<_> = first.iter().map(|(name, _)| name).collect();
	let declared: Vec<_> = registry.fields().map(|field| field.name()).collect();
	assert_eq!(names, declared);
}

#[test]
fn dump_requires_snapshot() {
	let mut builder = RegistryBuilder::new();
	every_type(&mut builder);
	let registry = builder.init(None, false).unwrap();

	assert!(registry.dump().is_none());
	assert_eq!(registry.list_configs().len(), 13);
}

#[test]
fn dump_reflects_latest_writes() {
	let mut builder = RegistryBuilder::new();
	builder.declare::<i64>("cfg_limit", Mutable, "10");
	builder.declare::<Vec<String>>("cfg_hosts", Mutable, "a,b");
	let registry = builder.init(None, true).unwrap();

	assert_eq!(registry.dump().unwrap().get("cfg_limit"), Some("10"));

	registry.set_config("cfg_limit", "20").unwrap();
	registry.set_config("cfg_hosts", "c ,d,e").unwrap();

	let dump = registry.dump().unwrap();
	assert_eq!(dump.get("cfg_limit"), Some("20"));
	assert_eq!(dump.get("cfg_hosts"), Some("c, d, e"));
	assert_eq!(dump.len(), 2);
}

#[test]
fn dump_and_entries_serialize_in_order() {
	let mut builder = RegistryBuilder::new();
	builder.declare::<bool>("cfg_b", Mutable, "true");
	builder.declare::<Vec<i32>>("cfg_a", Immutable, "1,2");
	let registry = builder.init(None, true).unwrap();

	let dump = serde_json::to_string(&registry.dump().unwrap()).unwrap();
	assert_eq!(dump, r#"{"cfg_b":"1","cfg_a":"1, 2"}"#);

	let entries = serde_json::to_value(registry.list_configs()).unwrap();
	assert_eq!(
		entries,
		serde_json::json!([
			{ "name": "cfg_b", "value": "1", "default": "true", "mutable": true, "type": "bool" },
			{ "name": "cfg_a", "value": "1, 2", "default": "1,2", "mutable": false, "type": "list<int32>" },
		])
	);
}
