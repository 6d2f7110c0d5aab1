/// Represents where an exact-table provider came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProviderOrigin {
	/// Installed when the registry was built.
	Builtin,
	/// Written back by the resolution strategy after synthesis.
	Synthesized,
	/// Registered explicitly by the caller.
	Explicit,
}

impl ProviderOrigin {
	/// Returns the precedence rank of the origin (higher is higher precedence).
	pub const fn rank(self) -> u8 {
		match self {
			Self::Builtin => 0,
			Self::Synthesized => 1,
			Self::Explicit => 2,
		}
	}

	/// Whether an incoming entry of this origin replaces an existing one.
	///
	/// Equal rank replaces, so repeated registration is an idempotent overwrite.
	pub const fn replaces(self, existing: Self) -> bool {
		self.rank() >= existing.rank()
	}
}

impl std::fmt::Display for ProviderOrigin {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Synthesized => write!(f, "synthesized"),
			Self::Explicit => write!(f, "explicit"),
		}
	}
}
