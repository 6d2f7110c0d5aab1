use veritype_registry::{ProviderError, ResolveError};

/// Failure of a verification run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
	#[error(transparent)]
	Resolve(#[from] ResolveError),
	#[error(transparent)]
	Provider(#[from] ProviderError),
	/// The caller's factory or settings are wrong; no law was checked.
	#[error("precondition violated: {0}")]
	Precondition(#[from] PreconditionViolation),
	/// The type under test breaks its contract.
	#[error("contract violated: {0}")]
	Contract(#[from] ContractViolation),
}

impl VerifyError {
	pub fn is_precondition(&self) -> bool {
		matches!(self, Self::Precondition(_))
	}

	pub fn is_contract(&self) -> bool {
		matches!(self, Self::Contract(_))
	}
}

/// Misuse of the verifier: bad equivalent-instance factory or unknown names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionViolation {
	#[error("factory for [{type_name}] produced unequal instances: {first} vs {second}")]
	NotEquivalent {
		type_name: &'static str,
		first: String,
		second: String,
	},
	#[error("factory for [{type_name}] produced different values for property [{property}]: {first} vs {second}")]
	PropertyMismatch {
		type_name: &'static str,
		property: &'static str,
		first: String,
		second: String,
	},
	#[error("[{type_name}] has no property named [{property}]")]
	UnknownProperty { type_name: &'static str, property: String },
}

/// A law the type under test does not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
	#[error("reflexivity: [{type_name}] instance does not equal itself: {instance}")]
	Reflexive { type_name: &'static str, instance: String },
	#[error("symmetry: [{type_name}] a == b disagrees with b == a")]
	Symmetric { type_name: &'static str },
	#[error("transitivity: [{type_name}] a == b and b == c but a != c")]
	Transitive { type_name: &'static str },
	#[error("consistency: [{type_name}] repeated comparison changed result at repetition {repetition}")]
	Consistent { type_name: &'static str, repetition: usize },
	#[error("[{type_name}] `!=` disagrees with `==`")]
	NotEqualInconsistent { type_name: &'static str },
	#[error("[{type_name}] instance equals the absent value")]
	EqualsAbsent { type_name: &'static str },
	#[error("[{type_name}] instance equals a value of a different type")]
	EqualsForeignType { type_name: &'static str },
	#[error(
		"significance: [{type_name}] instances remain equal after changing property [{property}]; is the property actually insignificant?"
	)]
	Significant { type_name: &'static str, property: &'static str },
	#[error(
		"significance: [{type_name}] instances became unequal after changing property [{property}]; is the property actually significant?"
	)]
	Insignificant { type_name: &'static str, property: &'static str },
	#[error("hash: equal [{type_name}] instances have different hashes")]
	HashMismatch { type_name: &'static str },
	#[error("hash: [{type_name}] hash changed at repetition {repetition}")]
	HashUnstable { type_name: &'static str, repetition: usize },
	#[error("format: clones of one [{type_name}] format differently: {first} vs {second}")]
	FormatMismatch {
		type_name: &'static str,
		first: String,
		second: String,
	},
	#[error("format: [{type_name}] formats as an empty string")]
	FormatEmpty { type_name: &'static str },
	#[error("format: [{type_name}] output changed at repetition {repetition}")]
	FormatUnstable { type_name: &'static str, repetition: usize },
	#[error("property [{property}] of [{type_name}] did not round trip: set {expected}, got {found}")]
	RoundTrip {
		type_name: &'static str,
		property: &'static str,
		expected: String,
		found: String,
	},
}
