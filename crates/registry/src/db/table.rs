//! Exact-type provider table with atomic publication.
//!
//! # Role
//!
//! Holds the providers registered for exact nominal types: built-in scalars,
//! caller registrations and synthesized providers. Reads load the current
//! snapshot; writes build an extended snapshot and publish it with a
//! compare-and-swap retry loop.
//!
//! # Invariants
//!
//! - Readers never observe a partially-constructed entry.
//! - Concurrent registrations are linearizable; no update is lost.
//! - An incoming entry only replaces an existing one when its origin ranks
//!   equal or higher (see [`ProviderOrigin::replaces`]).

use std::any::TypeId;
use std::sync::Arc;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap;

use crate::core::{ProviderOrigin, ValueProvider};

/// One exact-table entry.
#[derive(Debug, Clone)]
pub struct ProviderEntry {
	pub type_name: &'static str,
	pub provider: ValueProvider,
	pub origin: ProviderOrigin,
}

/// Outcome of a table insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
	/// Type was new; entry inserted.
	InsertedNew,
	/// Type existed; replaced with the incoming entry.
	ReplacedExisting,
	/// Type existed with a higher-ranked origin; incoming entry dropped.
	KeptExisting,
}

type Snapshot = FxHashMap<TypeId, ProviderEntry>;

pub(crate) struct ExactTable {
	snap: ArcSwap<Snapshot>,
}

impl ExactTable {
	pub(crate) fn new(entries: Snapshot) -> Self {
		Self {
			snap: ArcSwap::from_pointee(entries),
		}
	}

	pub(crate) fn get(&self, id: TypeId) -> Option<ProviderEntry> {
		self.snap.load().get(&id).cloned()
	}

	pub(crate) fn contains(&self, id: TypeId) -> bool {
		self.snap.load().contains_key(&id)
	}

	pub(crate) fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub(crate) fn count_origin(&self, origin: ProviderOrigin) -> usize {
		self.snap.load().values().filter(|e| e.origin == origin).count()
	}

	pub(crate) fn insert(&self, id: TypeId, entry: ProviderEntry) -> InsertAction {
		loop {
			let old = self.snap.load_full();

			let action = match old.get(&id) {
				None => InsertAction::InsertedNew,
				Some(existing) if entry.origin.replaces(existing.origin) => InsertAction::ReplacedExisting,
				Some(_) => InsertAction::KeptExisting,
			};
			if action == InsertAction::KeptExisting {
				return action;
			}

			let mut next = Snapshot::clone(&old);
			next.insert(id, entry.clone());
			let next = Arc::new(next);

			let prev = self.snap.compare_and_swap(&old, next);
			if Arc::ptr_eq(&prev, &old) {
				return action;
			}
			// Lost the race; retry against the newer snapshot.
		}
	}
}
