//! Built-in scalar providers.

use rand::Rng;
use rand::distributions::{Alphanumeric, Standard};

use crate::core::{Describe, ProviderOrigin, Random, ValueProvider};
use crate::db::table::ProviderEntry;

const MAX_STRING_LEN: usize = 16;
const FLOAT_MAGNITUDE: f64 = 1.0e6;

fn entry<T: Describe>(provider: ValueProvider) -> (std::any::TypeId, ProviderEntry) {
	(
		std::any::TypeId::of::<T>(),
		ProviderEntry {
			type_name: std::any::type_name::<T>(),
			provider,
			origin: ProviderOrigin::Builtin,
		},
	)
}

fn standard<T>(random: &Random) -> ValueProvider
where
	T: Describe,
	Standard: rand::distributions::Distribution<T>,
{
	let random = random.clone();
	ValueProvider::from_fn(move || random.with(|rng| rng.sample::<T, _>(Standard)))
}

fn alphanumeric_char(random: &Random) -> ValueProvider {
	let random = random.clone();
	ValueProvider::from_fn(move || random.with(|rng| char::from(rng.sample(Alphanumeric))))
}

fn string(random: &Random) -> ValueProvider {
	let random = random.clone();
	ValueProvider::from_fn(move || {
		random.with(|rng| {
			let len = rng.gen_range(1..=MAX_STRING_LEN);
			(0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect::<String>()
		})
	})
}

fn float32(random: &Random) -> ValueProvider {
	let random = random.clone();
	ValueProvider::from_fn(move || random.with(|rng| rng.gen_range(-FLOAT_MAGNITUDE..FLOAT_MAGNITUDE) as f32))
}

fn float64(random: &Random) -> ValueProvider {
	let random = random.clone();
	ValueProvider::from_fn(move || random.with(|rng| rng.gen_range(-FLOAT_MAGNITUDE..FLOAT_MAGNITUDE)))
}

/// Returns the scalar providers installed into every registry built with defaults.
pub fn scalar_entries(random: &Random) -> Vec<(std::any::TypeId, ProviderEntry)> {
	vec![
		entry::<bool>(standard::<bool>(random)),
		entry::<char>(alphanumeric_char(random)),
		entry::<i8>(standard::<i8>(random)),
		entry::<i16>(standard::<i16>(random)),
		entry::<i32>(standard::<i32>(random)),
		entry::<i64>(standard::<i64>(random)),
		entry::<i128>(standard::<i128>(random)),
		entry::<isize>(standard::<isize>(random)),
		entry::<u8>(standard::<u8>(random)),
		entry::<u16>(standard::<u16>(random)),
		entry::<u32>(standard::<u32>(random)),
		entry::<u64>(standard::<u64>(random)),
		entry::<u128>(standard::<u128>(random)),
		entry::<usize>(standard::<usize>(random)),
		entry::<f32>(float32(random)),
		entry::<f64>(float64(random)),
		entry::<String>(string(random)),
		entry::<()>(ValueProvider::constant(())),
	]
}
