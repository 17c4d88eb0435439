//! Typed configuration registry.
//!
//! Components declare named, typed fields with a default string during
//! startup. [`RegistryBuilder::init`] parses every default (or an override
//! supplied by an [`OverrideSource`]) and freezes the field set into a
//! [`Registry`]. From then on any thread may read fields through their
//! [`Conf`] handles, change mutable fields with [`Registry::set_config`], and
//! inspect everything with [`Registry::list_configs`] and [`Registry::dump`].
//!
//! # Startup
//!
//! ```
//! use tunables_registry::{Mutability, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! let workers = builder.declare::<i32>("worker_threads", Mutability::Immutable, "8");
//! let banner = builder.declare::<String>("banner", Mutability::Mutable, "hello");
//!
//! let registry = builder.init(None, true).expect("defaults are valid");
//! assert_eq!(workers.get(), 8);
//!
//! registry.set_config("banner", "goodbye").expect("banner is mutable");
//! assert_eq!(banner.get(), "goodbye");
//! assert!(registry.set_config("worker_threads", "16").is_err());
//! ```
//!
//! # Storage
//!
//! Scalar fields (`bool`, `i16`, `i32`, `i64`, `f64`) live in atomics and are
//! replaced with a single store. String and list fields each own a
//! [`parking_lot::RwLock`]; a write swaps in a fully built value, so readers
//! never see a partial string and unrelated fields never contend.

mod builder;
mod cell;
mod error;
mod field;
mod macros;
mod registry;
mod snapshot;
mod source;

pub use builder::RegistryBuilder;
pub use cell::{BoolCell, DoubleCell, Int16Cell, Int32Cell, Int64Cell, LockedCell, Storable, ValueCell};
pub use error::{ConfigError, ErrorKind, InitError, RegistryError, Result, ValueError};
pub use field::{Conf, FieldDescriptor, Mutability, Validator};
pub use registry::Registry;
pub use snapshot::{ConfigDump, ConfigEntry};
pub use source::OverrideSource;
pub use tunables_convert::{Convert, ConvertError, ElementType, FieldType, Value};
