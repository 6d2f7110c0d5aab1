/// Failure to find or build a provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// The resolution strategy exhausted overrides, registry and synthesis.
	#[error("no provider found or synthesized for property [{property}] of type [{type_name}]")]
	NoProvider { property: String, type_name: String },
	/// Neither the exact table nor any source supports the type.
	#[error("no provider registered for type [{type_name}]")]
	Unsupported { type_name: String },
	/// An enumeration without constants cannot be instantiated.
	#[error("enumeration [{type_name}] declares no constants")]
	Uninhabited { type_name: String },
}

/// Failure while producing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
	#[error("expected a value of type [{expected}], got [{found}]")]
	TypeMismatch {
		expected: &'static str,
		found: &'static str,
	},
	/// A no-op provider's output reached a place that needs a real instance.
	#[error("absent value where [{expected}] is required")]
	Absent { expected: &'static str },
	#[error("enumeration [{type_name}] declares no constants")]
	Uninhabited { type_name: &'static str },
	#[error("construction of [{type_name}] panicked: {message}")]
	Panicked {
		type_name: &'static str,
		message: String,
	},
	#[error("field [{field}] of [{type_name}]: {source}")]
	Field {
		field: &'static str,
		type_name: &'static str,
		#[source]
		source: Box<ProviderError>,
	},
}

impl ProviderError {
	pub(crate) fn mismatch<T>(found: &super::Value) -> Self {
		if found.is_absent() {
			return Self::Absent {
				expected: std::any::type_name::<T>(),
			};
		}
		Self::TypeMismatch {
			expected: std::any::type_name::<T>(),
			found: found.type_name(),
		}
	}
}
