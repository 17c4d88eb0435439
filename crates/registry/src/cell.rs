//! Value cells backing configuration fields.
//!
//! Every storable type picks its cell through [`Storable::Cell`]. Scalars use
//! a single atomic word so a store is never observed half-written. Strings
//! and lists cannot be swapped atomically, so each one owns its own lock.

use std::sync::atomic::{AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicU64, Ordering};

use parking_lot::RwLock;
use tunables_convert::{Convert, Element};

/// Storage for the current value of one field.
pub trait ValueCell<T>: Default + Send + Sync + 'static {
	/// Returns a copy of the last completed store.
	fn load(&self) -> T;

	/// Replaces the value; visible to every later [`load`](Self::load).
	fn store(&self, value: T);
}

macro_rules! atomic_cell {
	($($(#[$meta:meta])* $name:ident($atomic:ty) => $ty:ty;)*) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Default)]
			pub struct $name($atomic);

			impl ValueCell<$ty> for $name {
				#[inline]
				fn load(&self) -> $ty {
					self.0.load(Ordering::Acquire)
				}

				#[inline]
				fn store(&self, value: $ty) {
					self.0.store(value, Ordering::Release);
				}
			}
		)*
	};
}

atomic_cell! {
	/// Cell for `bool` fields.
	BoolCell(AtomicBool) => bool;
	/// Cell for `i16` fields.
	Int16Cell(AtomicI16) => i16;
	/// Cell for `i32` fields.
	Int32Cell(AtomicI32) => i32;
	/// Cell for `i64` fields.
	Int64Cell(AtomicI64) => i64;
}

/// Cell for `f64` fields, stored as raw bits.
#[derive(Debug, Default)]
pub struct DoubleCell(AtomicU64);

impl ValueCell<f64> for DoubleCell {
	#[inline]
	fn load(&self) -> f64 {
		f64::from_bits(self.0.load(Ordering::Acquire))
	}

	#[inline]
	fn store(&self, value: f64) {
		self.0.store(value.to_bits(), Ordering::Release);
	}
}

/// Cell for string and list fields, guarded by a per-field lock.
#[derive(Debug, Default)]
pub struct LockedCell<T>(RwLock<T>);

impl<T> LockedCell<T> {
	/// Runs `f` against the current value under the read lock.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.0.read())
	}
}

impl<T: Clone + Default + Send + Sync + 'static> ValueCell<T> for LockedCell<T> {
	fn load(&self) -> T {
		self.0.read().clone()
	}

	fn store(&self, value: T) {
		let mut guard = self.0.write();
		let previous = std::mem::replace(&mut *guard, value);
		// Free the old value outside the critical section.
		drop(guard);
		drop(previous);
	}
}

mod sealed {
	pub trait Sealed {}

	impl Sealed for bool {}
	impl Sealed for i16 {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
	impl<T: super::Storable + super::Element> Sealed for Vec<T> {}
}

/// Rust types that can back a configuration field.
///
/// Sealed: the supported set is `bool`, `i16`, `i32`, `i64`, `f64`, `String`
/// and `Vec` of any of those.
pub trait Storable: sealed::Sealed + Convert + Clone + Send + Sync + 'static {
	type Cell: ValueCell<Self>;
}

impl Storable for bool {
	type Cell = BoolCell;
}

impl Storable for i16 {
	type Cell = Int16Cell;
}

impl Storable for i32 {
	type Cell = Int32Cell;
}

impl Storable for i64 {
	type Cell = Int64Cell;
}

impl Storable for f64 {
	type Cell = DoubleCell;
}

impl Storable for String {
	type Cell = LockedCell<String>;
}

impl<T: Storable + Element> Storable for Vec<T> {
	type Cell = LockedCell<Vec<T>>;
}
