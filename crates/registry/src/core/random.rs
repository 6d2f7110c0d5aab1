//! Shared random source.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How the enumeration provider picks a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnumSelection {
	/// `floor((n - 1) * r)`: never yields the last-declared constant when `n >= 2`.
	#[default]
	ExcludeLast,
	/// `floor(n * r)`: every constant is reachable.
	Uniform,
}

/// Seeded generator shared by every provider a registry hands out.
///
/// Cloning shares the underlying generator, so a fixed seed makes a whole
/// verification pass reproducible.
#[derive(Clone)]
pub struct Random {
	rng: Arc<Mutex<StdRng>>,
}

impl Random {
	pub fn seeded(seed: u64) -> Self {
		Self {
			rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
		}
	}

	pub fn from_entropy() -> Self {
		Self {
			rng: Arc::new(Mutex::new(StdRng::from_entropy())),
		}
	}

	/// Runs `f` with exclusive access to the generator.
	pub fn with<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
		f(&mut self.rng.lock())
	}

	/// Uniform in `[0, 1)`.
	pub fn unit(&self) -> f64 {
		self.with(|rng| rng.r#gen::<f64>())
	}

	/// Uniform container size in `[0, max]`.
	pub fn size(&self, max: usize) -> usize {
		self.with(|rng| rng.gen_range(0..=max))
	}

	/// Picks an index into `len` constants, or `None` when `len == 0`.
	pub fn index(&self, len: usize, selection: EnumSelection) -> Option<usize> {
		if len == 0 {
			return None;
		}
		let span = match selection {
			EnumSelection::ExcludeLast => len - 1,
			EnumSelection::Uniform => len,
		};
		let idx = (span as f64 * self.unit()).floor() as usize;
		Some(idx.min(len - 1))
	}
}

impl std::fmt::Debug for Random {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Random").finish_non_exhaustive()
	}
}
