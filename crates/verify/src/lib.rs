//! Contract verification for described types.
//!
//! Generates values through a [`veritype_registry::Resolver`] and checks that
//! a type's property accessors, `PartialEq`, `Hash` and `Debug`
//! implementations behave.
//!
//! ```ignore
//! use veritype_macros::Describe;
//!
//! #[derive(Debug, Default, Clone, Describe)]
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! impl PartialEq for Person {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.first_name == other.first_name
//!     }
//! }
//!
//! veritype_verify::verify::<Person>(&["last_name"])?;
//! ```

use veritype_registry::{Bean, ProviderRegistry};

pub mod config;
pub mod contract;
pub mod equals;
pub mod error;
pub mod factory;
pub mod format;
pub mod hash;
pub mod property;
mod significance;

pub use config::{DEFAULT_HASH_REPETITIONS, DEFAULT_ITERATIONS, Settings};
pub use contract::ContractVerifier;
pub use equals::EqualsVerifier;
pub use error::{ContractViolation, PreconditionViolation, VerifyError};
pub use factory::{EquivalentFactory, Populated};
pub use format::FormatVerifier;
pub use hash::HashVerifier;
pub use property::PropertyVerifier;

#[cfg(test)]
mod tests;

/// Verifies `T` against the process-wide registry with default settings.
pub fn verify<T: Bean>(insignificant: &[&str]) -> Result<(), VerifyError> {
	ContractVerifier::new(ProviderRegistry::global())
		.settings(Settings::new().insignificant(insignificant.iter().copied()))
		.verify::<T>()
}
