use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::core::{Describe, EnumSelection, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
enum Level {
	Low,
	Mid,
	High,
}

impl Describe for Level {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::enumeration::<Self>()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, strum::EnumIter)]
enum Only {
	One,
}

impl Describe for Only {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::enumeration::<Self>()
	}
}

/// Opaque type with no provider anywhere.
#[derive(Debug, Clone, PartialEq)]
struct Opaque;

impl Describe for Opaque {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::scalar::<Self>()
	}
}

fn registry() -> ProviderRegistry {
	ProviderRegistry::builder().seed(11).build()
}

#[test]
fn test_builtin_sources_are_priority_ordered() {
	let registry = registry();
	assert_eq!(
		registry.source_names(),
		vec!["array", "sequence", "set", "map", "optional", "enumeration"]
	);
}

#[test]
fn test_map_of_string_to_i32() {
	let registry = registry();
	let provider = registry.provide(&HashMap::<String, i32>::describe()).unwrap();
	for _ in 0..50 {
		let map = provider.provide_as::<HashMap<String, i32>>().unwrap();
		assert!(map.len() <= registry.max_size());
	}
}

#[test]
fn test_sequences_and_sets_respect_max_size() {
	let registry = ProviderRegistry::builder().seed(3).max_size(3).build();
	let vec = registry.provide(&Vec::<u64>::describe()).unwrap();
	let deque = registry.provide(&VecDeque::<bool>::describe()).unwrap();
	let set = registry.provide(&BTreeSet::<i16>::describe()).unwrap();
	let mut saw_empty = false;
	let mut saw_full = false;
	for _ in 0..200 {
		let v = vec.provide_as::<Vec<u64>>().unwrap();
		saw_empty |= v.is_empty();
		saw_full |= v.len() == 3;
		assert!(v.len() <= 3);
		assert!(deque.provide_as::<VecDeque<bool>>().unwrap().len() <= 3);
		assert!(set.provide_as::<BTreeSet<i16>>().unwrap().len() <= 3);
	}
	assert!(saw_empty && saw_full, "sizes should span [0, max_size]");
}

#[test]
fn test_array_elements_come_from_element_provider() {
	let registry = registry();
	registry.register::<u8>(ValueProvider::constant(9_u8));
	let provider = registry.provide(&Box::<[u8]>::describe()).unwrap();
	for _ in 0..20 {
		let array = provider.provide_as::<Box<[u8]>>().unwrap();
		assert!(array.len() <= crate::db::DEFAULT_MAX_SIZE);
		assert!(array.iter().all(|&b| b == 9));
	}
}

#[test]
fn test_unresolvable_element_degrades_to_empty_container() {
	let registry = registry();
	let provider = registry.provide(&Vec::<Opaque>::describe()).unwrap();
	for _ in 0..20 {
		assert!(provider.provide_as::<Vec<Opaque>>().unwrap().is_empty());
	}

	let provider = registry.provide(&HashMap::<String, Opaque>::describe()).unwrap();
	assert!(provider.provide_as::<HashMap<String, Opaque>>().unwrap().is_empty());
}

#[test]
fn test_optional_is_always_some() {
	let registry = registry();
	let provider = registry.provide(&Option::<String>::describe()).unwrap();
	for _ in 0..20 {
		assert!(provider.provide_as::<Option<String>>().unwrap().is_some());
	}
}

#[test]
fn test_optional_of_unresolvable_fails() {
	let registry = registry();
	let err = registry.provide(&Option::<Opaque>::describe()).unwrap_err();
	assert!(matches!(err, ResolveError::Unsupported { .. }), "{err}");
}

#[test]
fn test_enum_default_selection_never_yields_last() {
	let registry = registry();
	let provider = registry.provide(&Level::describe()).unwrap();
	let mut seen = HashSet::new();
	for _ in 0..1000 {
		seen.insert(provider.provide_as::<Level>().unwrap());
	}
	assert!(!seen.contains(&Level::High));
	assert_eq!(seen, HashSet::from([Level::Low, Level::Mid]));
}

#[test]
fn test_enum_uniform_selection_reaches_last() {
	let registry = ProviderRegistry::builder()
		.seed(5)
		.enum_selection(EnumSelection::Uniform)
		.build();
	let provider = registry.provide(&Level::describe()).unwrap();
	let seen: HashSet<_> = (0..1000).map(|_| provider.provide_as::<Level>().unwrap()).collect();
	assert_eq!(seen.len(), 3);
}

#[test]
fn test_single_constant_enum_is_constant() {
	let registry = registry();
	let provider = registry.provide(&Only::describe()).unwrap();
	for _ in 0..10 {
		assert_eq!(provider.provide_as::<Only>().unwrap(), Only::One);
	}
}

#[test]
fn test_empty_enum_is_uninhabited() {
	let registry = registry();
	let err = enumeration_provider(
		&Level::describe(),
		Vec::new(),
		registry.random().clone(),
		registry.enum_selection(),
	)
	.unwrap_err();
	assert!(matches!(err, ResolveError::Uninhabited { .. }), "{err}");
}

#[test]
fn test_bare_sequence_defaults_to_string_elements() {
	let registry = ProviderRegistry::builder().seed(1).max_size(4).build();
	let bare = Vec::<i32>::describe().erased();
	let provider = registry.provide(&bare).unwrap();
	let mut produced_any = false;
	for _ in 0..50 {
		let v = provider.provide_as::<Vec<String>>().unwrap();
		produced_any |= !v.is_empty();
	}
	assert!(produced_any);
}

#[test]
fn test_bare_map_and_set_never_fail() {
	let registry = ProviderRegistry::builder().seed(4).build();
	let map = registry.provide(&HashMap::<i32, bool>::describe().erased()).unwrap();
	let set = registry.provide(&BTreeSet::<u64>::describe().erased()).unwrap();
	let optional = registry.provide(&Option::<i8>::describe().erased()).unwrap();
	for _ in 0..50 {
		map.provide_as::<HashMap<String, String>>().unwrap();
		set.provide_as::<BTreeSet<String>>().unwrap();
		assert!(optional.provide_as::<Option<String>>().unwrap().is_some());
	}
}

struct ConstantVecSource;

impl ProviderSource for ConstantVecSource {
	fn name(&self) -> &'static str {
		"constant-vec"
	}

	fn priority(&self) -> i16 {
		10
	}

	fn supports(&self, ty: &TypeDescriptor) -> bool {
		ty.family() == crate::core::TypeFamily::Sequence
	}

	fn provide(&self, _ty: &TypeDescriptor, _registry: &ProviderRegistry) -> Result<ValueProvider, ResolveError> {
		Ok(ValueProvider::new("constant-vec", || Ok(Value::new(vec![1_i32, 2, 3]))))
	}
}

#[test]
fn test_low_priority_source_shadows_builtins() {
	let registry = ProviderRegistry::builder()
		.seed(1)
		.source(Arc::new(ConstantVecSource))
		.build();
	assert_eq!(registry.source_names()[0], "constant-vec");
	let provider = registry.provide(&Vec::<i32>::describe()).unwrap();
	assert_eq!(provider.provide_as::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
}

proptest! {
	#[test]
	fn prop_sizes_bounded_by_max(seed in any::<u64>(), max in 0_usize..16) {
		let registry = ProviderRegistry::builder().seed(seed).max_size(max).build();
		let provider = registry.provide(&HashSet::<u32>::describe()).unwrap();
		for _ in 0..8 {
			let set = provider.provide_as::<HashSet<u32>>().unwrap();
			prop_assert!(set.len() <= max);
		}
	}

	#[test]
	fn prop_same_seed_same_output(seed in any::<u64>()) {
		let a = ProviderRegistry::builder().seed(seed).build();
		let b = ProviderRegistry::builder().seed(seed).build();
		let ty = Vec::<String>::describe();
		let pa = a.provide(&ty).unwrap();
		let pb = b.provide(&ty).unwrap();
		for _ in 0..4 {
			prop_assert_eq!(pa.provide_as::<Vec<String>>().unwrap(), pb.provide_as::<Vec<String>>().unwrap());
		}
	}
}
