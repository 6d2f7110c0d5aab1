use std::collections::{BTreeMap, HashSet};

use veritype_macros::Describe;
use veritype_registry::ProviderRegistry;
use veritype_verify::{ContractVerifier, ContractViolation, Settings, VerifyError, verify};

/// Identity is the database key; equality is about content.
#[derive(Debug, Default, Clone, Describe)]
struct Article {
	id: i64,
	name: String,
	tags: HashSet<String>,
}

impl PartialEq for Article {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.tags == other.tags
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, Describe)]
enum Priority {
	Low,
	Normal,
	Urgent,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Describe)]
struct Address {
	street: String,
	number: u16,
}

#[derive(Debug, Default, Clone, PartialEq, Describe)]
struct Ticket {
	title: String,
	priority: Option<Priority>,
	history: Vec<Priority>,
	address: Address,
	watchers: Vec<Address>,
	counts: BTreeMap<String, u32>,
	#[property(skip)]
	cached_len: usize,
}

#[test]
fn test_article_passes_with_insignificant_id() {
	verify::<Article>(&["id"]).unwrap();
}

#[test]
fn test_article_fails_naming_id() {
	let err = verify::<Article>(&[]).unwrap_err();
	assert!(
		matches!(
			err,
			VerifyError::Contract(ContractViolation::Significant { property: "id", .. })
		),
		"{err}"
	);
	let message = err.to_string();
	assert!(message.contains("[id]"), "{message}");
	assert!(message.ends_with("is the property actually insignificant?"));
}

#[test]
fn test_nested_structures_enums_and_containers() {
	let registry = ProviderRegistry::builder().seed(99).build();
	ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(25))
		.verify::<Ticket>()
		.unwrap();

	assert!(registry.has_exact(&<Address as veritype_registry::Describe>::describe()));
}

#[test]
fn test_hashed_contract_on_derived_type() {
	let registry = ProviderRegistry::builder().seed(7).build();
	ContractVerifier::new(&registry)
		.settings(Settings::new().iterations(25))
		.verify_hashed::<Address>()
		.unwrap();
}
