use pretty_assertions::assert_eq;
use veritype_macros::Describe;
use veritype_registry::ProviderRegistry;
use veritype_verify::{ContractVerifier, ContractViolation, PreconditionViolation, Settings, VerifyError};

/// Equality looks at `firstName` only.
#[derive(Debug, Default, Clone, Describe)]
struct Person {
	#[property(rename = "firstName")]
	first_name: String,
	#[property(rename = "lastName")]
	last_name: String,
}

impl PartialEq for Person {
	fn eq(&self, other: &Self) -> bool {
		self.first_name == other.first_name
	}
}

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn verifier(registry: &ProviderRegistry, settings: Settings) -> ContractVerifier<'_> {
	ContractVerifier::new(registry).settings(settings.iterations(20))
}

#[test]
fn test_insignificant_last_name_passes() {
	init_tracing();
	let registry = ProviderRegistry::builder().seed(1).build();
	verifier(&registry, Settings::new().insignificant(["lastName"]))
		.verify::<Person>()
		.unwrap();
}

#[test]
fn test_significant_last_name_fails() {
	init_tracing();
	let registry = ProviderRegistry::builder().seed(2).build();
	let err = verifier(&registry, Settings::new()).verify::<Person>().unwrap_err();

	assert_eq!(
		err,
		VerifyError::Contract(ContractViolation::Significant {
			type_name: std::any::type_name::<Person>(),
			property: "lastName",
		})
	);
	assert!(err.to_string().ends_with("is the property actually insignificant?"));
}

#[test]
fn test_insignificant_first_name_fails() {
	init_tracing();
	let registry = ProviderRegistry::builder().seed(3).build();
	let err = verifier(&registry, Settings::new().insignificant(["firstName", "lastName"]))
		.verify::<Person>()
		.unwrap_err();

	assert_eq!(
		err,
		VerifyError::Contract(ContractViolation::Insignificant {
			type_name: std::any::type_name::<Person>(),
			property: "firstName",
		})
	);
	assert!(err.to_string().ends_with("is the property actually significant?"));
}

#[test]
fn test_ignored_property_is_not_checked() {
	init_tracing();
	let registry = ProviderRegistry::builder().seed(4).build();
	verifier(&registry, Settings::new().ignore(["lastName"]))
		.verify::<Person>()
		.unwrap();
}

#[test]
fn test_unknown_insignificant_name() {
	let registry = ProviderRegistry::builder().seed(5).build();
	let err = verifier(&registry, Settings::new().insignificant(["middleName"]))
		.verify::<Person>()
		.unwrap_err();
	assert_eq!(
		err,
		VerifyError::Precondition(PreconditionViolation::UnknownProperty {
			type_name: std::any::type_name::<Person>(),
			property: "middleName".to_owned(),
		})
	);
}
