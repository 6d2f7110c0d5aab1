use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;
use veritype_macros::Describe;
use veritype_registry::{ProviderRegistry, Resolver, ValueProvider};

use super::*;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Describe)]
struct Account {
	owner: String,
	balance: i64,
}

/// Equality and hash on `name` only; `nonce` is noise.
#[derive(Default, Clone, Describe)]
struct Noisy {
	name: String,
	nonce: u64,
}

impl PartialEq for Noisy {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl fmt::Debug for Noisy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Noisy({}, {})", self.name, self.nonce)
	}
}

impl Hash for Noisy {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
		self.nonce.hash(state);
	}
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn noisy() -> Noisy {
	Noisy {
		name: "same".into(),
		nonce: COUNTER.fetch_add(1, Ordering::SeqCst),
	}
}

/// Formats as nothing at all.
#[derive(Default, Clone, PartialEq, Describe)]
struct Silent {
	flag: bool,
}

impl fmt::Debug for Silent {
	fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
		Ok(())
	}
}

static SERIAL: AtomicU64 = AtomicU64::new(0);

/// Every clone takes a fresh serial number; equality ignores it.
#[derive(Default, Describe)]
struct Copied {
	label: String,
	#[property(skip)]
	serial: u64,
}

impl Clone for Copied {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			serial: SERIAL.fetch_add(1, Ordering::SeqCst),
		}
	}
}

impl PartialEq for Copied {
	fn eq(&self, other: &Self) -> bool {
		self.label == other.label
	}
}

impl fmt::Debug for Copied {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Copied({}, #{})", self.label, self.serial)
	}
}

#[derive(Debug, Default, Clone, PartialEq, Describe)]
struct Tagged {
	name: String,
	tags: HashSet<String>,
}

fn tagged() -> Tagged {
	Tagged {
		name: "n".into(),
		tags: ["a", "b", "c", "d", "e", "f", "g", "h"].into_iter().map(String::from).collect(),
	}
}

fn registry() -> ProviderRegistry {
	ProviderRegistry::builder().seed(23).build()
}

#[test]
fn test_settings_defaults() {
	let settings = Settings::new();
	assert_eq!(settings.iteration_count(), DEFAULT_ITERATIONS);
	assert_eq!(settings.hash_repetition_count(), DEFAULT_HASH_REPETITIONS);
	assert!(settings.overrides().is_empty());
	assert!(!settings.is_ignored("owner"));
}

#[test]
fn test_settings_builder() {
	let settings = Settings::new()
		.ignore(["owner"])
		.insignificant(vec![String::from("balance")])
		.override_with("owner", ValueProvider::constant(String::from("x")))
		.iterations(3)
		.hash_repetitions(5);
	assert!(settings.is_ignored("owner"));
	assert!(settings.is_insignificant("balance"));
	assert!(settings.overrides().contains("owner"));
	assert_eq!(settings.iteration_count(), 3);
	assert_eq!(settings.hash_repetition_count(), 5);
	assert_eq!(settings.check_names::<Account>(), Ok(()));
}

#[rstest]
#[case(Settings::new().ignore(["missing"]))]
#[case(Settings::new().insignificant(["missing"]))]
fn test_unknown_names_are_preconditions(#[case] settings: Settings) {
	assert_eq!(
		settings.check_names::<Account>(),
		Err(PreconditionViolation::UnknownProperty {
			type_name: std::any::type_name::<Account>(),
			property: "missing".to_owned(),
		})
	);
}

#[test]
fn test_populated_respects_overrides_and_ignores() {
	let registry = registry();
	let resolver = Resolver::new(&registry);
	let settings = Settings::new()
		.ignore(["balance"])
		.override_with("owner", ValueProvider::constant(String::from("Ada")));

	let factory = Populated::<Account>::generate(&resolver, &settings).unwrap();
	assert_eq!(
		factory.template(),
		&Account {
			owner: "Ada".into(),
			balance: 0,
		}
	);
	assert_eq!(factory.make().unwrap(), factory.make().unwrap());
}

#[test]
fn test_closure_factory() {
	let factory = || Account {
		owner: "x".into(),
		balance: 1,
	};
	assert_eq!(EquivalentFactory::make(&factory).unwrap().balance, 1);
}

#[test]
fn test_laws_hold_for_derived_eq() {
	let registry = registry();
	let resolver = Resolver::new(&registry);
	let settings = Settings::new();
	let factory = Populated::<Account>::generate(&resolver, &settings).unwrap();
	EqualsVerifier::new(&resolver, &settings)
		.verify_laws::<Account, _>(&factory)
		.unwrap();
}

#[test]
fn test_unequal_factory_is_precondition() {
	let registry = registry();
	let resolver = Resolver::new(&registry);
	let settings = Settings::new();
	let factory = || Account {
		owner: "x".into(),
		balance: COUNTER.fetch_add(1, Ordering::SeqCst) as i64,
	};

	let err = EqualsVerifier::new(&resolver, &settings)
		.verify_laws::<Account, _>(&factory)
		.unwrap_err();
	assert!(err.is_precondition(), "{err}");
}

#[test]
fn test_hash_mismatch_detected() {
	let err = HashVerifier::new(10).verify::<Noisy, _>(&noisy).unwrap_err();
	assert_eq!(
		err,
		VerifyError::Contract(ContractViolation::HashMismatch {
			type_name: std::any::type_name::<Noisy>(),
		})
	);
}

#[test]
fn test_hash_holds_for_derived_hash() {
	let factory = Populated::from_template(Account {
		owner: "x".into(),
		balance: 7,
	});
	HashVerifier::new(DEFAULT_HASH_REPETITIONS)
		.verify::<Account, _>(&factory)
		.unwrap();
}

#[test]
fn test_format_mismatch_detected() {
	let factory = Populated::from_template(Copied {
		label: "x".into(),
		serial: 0,
	});
	let err = FormatVerifier::new(1).verify::<Copied, _>(&factory).unwrap_err();
	assert!(
		matches!(err, VerifyError::Contract(ContractViolation::FormatMismatch { .. })),
		"{err}"
	);
}

#[test]
fn test_format_tolerates_unordered_collections() {
	FormatVerifier::new(10).verify::<Tagged, _>(&tagged).unwrap();
	FormatVerifier::new(10).verify::<Noisy, _>(&noisy).unwrap();

	let registry = registry();
	ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(20))
		.verify_with::<Tagged, _>(&tagged)
		.unwrap();
}

#[test]
fn test_empty_format_detected() {
	let err = FormatVerifier::new(1).verify::<Silent, _>(&Silent::default).unwrap_err();
	assert!(
		matches!(err, VerifyError::Contract(ContractViolation::FormatEmpty { .. })),
		"{err}"
	);
}

#[test]
fn test_property_round_trip() {
	let registry = registry();
	let resolver = Resolver::new(&registry);
	let settings = Settings::new();
	PropertyVerifier::new(&resolver, &settings).verify::<Account>().unwrap();
}

#[test]
fn test_contract_verifier_hashed() {
	let registry = registry();
	ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(10))
		.verify_hashed::<Account>()
		.unwrap();
}
