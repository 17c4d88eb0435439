//! Declaration macros for groups of configuration fields.

/// Declares a struct of [`Conf`](crate::Conf) handles plus the `register`
/// function that adds every field to a [`RegistryBuilder`](crate::RegistryBuilder).
///
/// Field names double as configuration names. Append `(mutable)` after the
/// default to allow runtime changes.
///
/// ```
/// tunables_registry::config_fields! {
///     /// Storage engine settings.
///     pub struct StorageConfig {
///         /// Compaction worker count.
///         pub compaction_threads: i32 = "4",
///         pub storage_root: String = "/data",
///         pub slow_query_ms: i64 = "5000" (mutable),
///         pub hot_tables: Vec<String> = "orders,users" (mutable),
///     }
/// }
///
/// let mut builder = tunables_registry::RegistryBuilder::new();
/// let storage = StorageConfig::register(&mut builder);
/// let registry = builder.init(None, false).unwrap();
///
/// assert_eq!(storage.compaction_threads.get(), 4);
/// registry.set_config("slow_query_ms", "250").unwrap();
/// assert_eq!(storage.slow_query_ms.get(), 250);
/// ```
#[macro_export]
macro_rules! config_fields {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$field_meta:meta])*
				$field_vis:vis $field:ident : $ty:ty = $default:literal $(($mode:ident))?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Clone)]
		$vis struct $name {
			$(
				$(#[$field_meta])*
				$field_vis $field: $crate::Conf<$ty>,
			)*
		}

		impl $name {
			/// Declares every field of this group.
			///
			/// # Panics
			///
			/// Panics if any field name is already registered.
			$vis fn register(builder: &mut $crate::RegistryBuilder) -> Self {
				Self {
					$(
						$field: builder.declare::<$ty>(
							stringify!($field),
							$crate::__field_mutability!($($mode)?),
							$default,
						),
					)*
				}
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_mutability {
	() => {
		$crate::Mutability::Immutable
	};
	(mutable) => {
		$crate::Mutability::Mutable
	};
}
