use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use veritype_macros::Describe;
use veritype_registry::{ProviderRegistry, ResolveError, Resolver, TypeDescriptor, ValueProvider};
use veritype_verify::{ContractVerifier, PropertyVerifier, Settings, VerifyError};

#[derive(Debug, Default, Clone, PartialEq, Describe)]
struct Label {
	name: String,
	note: String,
}

/// A handle nothing knows how to make.
#[derive(Debug, Clone, PartialEq)]
struct Handle(u32);

impl veritype_registry::Describe for Handle {
	fn describe() -> TypeDescriptor {
		TypeDescriptor::scalar::<Self>()
	}
}

#[derive(Debug, Default, Clone, PartialEq, Describe)]
struct Session {
	user: String,
	handle: Option<Handle>,
}

fn counting(counter: &Arc<AtomicUsize>, value: &'static str) -> ValueProvider {
	let counter = Arc::clone(counter);
	ValueProvider::from_fn(move || {
		counter.fetch_add(1, Ordering::SeqCst);
		String::from(value)
	})
}

#[test]
fn test_override_only_provider_invoked() {
	let registry = ProviderRegistry::builder().seed(1).build();
	let from_registry = Arc::new(AtomicUsize::new(0));
	let from_override = Arc::new(AtomicUsize::new(0));
	registry.register::<String>(counting(&from_registry, "registry"));

	let settings = Settings::new()
		.ignore(["note"])
		.override_with("name", counting(&from_override, "override"));
	let resolver = Resolver::new(&registry);
	let verifier = PropertyVerifier::new(&resolver, &settings);

	const N: usize = 50;
	for _ in 0..N {
		verifier.verify::<Label>().unwrap();
	}
	assert_eq!(from_override.load(Ordering::SeqCst), N);
	assert_eq!(from_registry.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unknown_type_surfaces_no_provider() {
	let registry = ProviderRegistry::builder().seed(2).build();
	let err = ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(1))
		.verify::<Session>()
		.unwrap_err();
	assert_eq!(
		err,
		VerifyError::Resolve(ResolveError::NoProvider {
			property: "handle".to_owned(),
			type_name: std::any::type_name::<Option<Handle>>().to_owned(),
		})
	);
}

#[test]
fn test_registered_handle_unblocks_verification() {
	let registry = ProviderRegistry::builder().seed(3).build();
	let next = Arc::new(AtomicUsize::new(0));
	let counter = Arc::clone(&next);
	registry.register::<Handle>(ValueProvider::from_fn(move || {
		Handle(counter.fetch_add(1, Ordering::SeqCst) as u32)
	}));

	ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(10))
		.verify::<Session>()
		.unwrap();
	assert!(next.load(Ordering::SeqCst) > 0);
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(16))]

	#[test]
	fn prop_any_seed_verifies_label(seed in any::<u64>()) {
		let registry = ProviderRegistry::builder().seed(seed).build();
		let result = ContractVerifier::new(&registry)
			.settings(Settings::new().iterations(5))
			.verify::<Label>();
		prop_assert!(result.is_ok(), "{:?}", result);
	}
}
