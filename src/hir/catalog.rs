//! Catalog: the closed set of known public members.
//!
//! Built once from packed descriptors and never mutated afterwards, so a
//! single `Catalog` can be shared by any number of concurrent resolutions.

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::debug;

use crate::parser::{SignatureSyntaxError, parse_descriptor};
use crate::syntax::{ClassKey, MemberReference, NameKey};

/// One or more descriptors could not be parsed while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{count} invalid public API entries", count = .entries.len())]
pub struct InvalidEntries {
    /// `(index in input, error)` for every rejected descriptor.
    pub entries: Vec<(usize, SignatureSyntaxError)>,
}

/// Known public members and the classes they belong to.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Insertion-ordered so candidate lists are deterministic.
    members: IndexSet<MemberReference, FxBuildHasher>,
    /// Name-only index into `members`.
    by_name: FxHashMap<NameKey, Vec<usize>>,
    classes: FxHashSet<ClassKey>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every descriptor and build the catalog.
    ///
    /// All descriptors are checked; the error lists every bad entry.
    pub fn from_descriptors<I, S>(descriptors: I) -> Result<Self, InvalidEntries>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = Vec::new();
        let mut entries = Vec::new();
        for (index, descriptor) in descriptors.into_iter().enumerate() {
            match parse_descriptor(descriptor.as_ref()) {
                Ok(member) => members.push(member),
                Err(err) => entries.push((index, err)),
            }
        }

        if entries.is_empty() {
            Ok(Self::from_members(members))
        } else {
            Err(InvalidEntries { entries })
        }
    }

    /// Build a catalog from already parsed references.
    pub fn from_members(members: impl IntoIterator<Item = MemberReference>) -> Self {
        let mut catalog = Self::new();
        for member in members {
            catalog.classes.insert(member.class_key());
            let key = member.name_key();
            let (index, inserted) = catalog.members.insert_full(member);
            if inserted {
                catalog.by_name.entry(key).or_default().push(index);
            }
        }
        debug!(
            "Built catalog with {} members in {} classes",
            catalog.members.len(),
            catalog.classes.len()
        );
        catalog
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Is `(package, class)` the owner of at least one public member?
    pub fn contains_class(&self, package: &str, class: &str) -> bool {
        self.classes.contains(&ClassKey {
            package: package.into(),
            class: class.into(),
        })
    }

    /// Exact lookup: package, class, member and parameters all equal.
    pub fn contains_exact(&self, reference: &MemberReference) -> bool {
        self.members.contains(reference)
    }

    /// All members equal to `reference` by name, ignoring parameters, in
    /// insertion order.
    pub fn name_matches(&self, reference: &MemberReference) -> Vec<&MemberReference> {
        self.by_name
            .get(&reference.name_key())
            .into_iter()
            .flatten()
            .filter_map(|&index| self.members.get_index(index))
            .collect()
    }

    /// Iterate all members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &MemberReference> {
        self.members.iter()
    }
}
