use crate::{model::FieldDescriptor, update::UpdateError, value::Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Field
///
/// A classified patch field: its descriptor plus the value it carried.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub descriptor: FieldDescriptor,
    pub value: Value,
}

///
/// UpdateReport
///
/// The four classification collections for one update pass, keyed by the
/// patch field's spelling. Every patch field lands in exactly one
/// collection; together the keys partition the patch's field names.
/// Each pass replaces the previous report wholesale.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UpdateReport {
    updated: BTreeMap<String, Field>,
    skipped: BTreeMap<String, Field>,
    not_found: BTreeMap<String, Field>,
    not_assignable: BTreeMap<String, Field>,
}

impl UpdateReport {
    /// Fields copied into the target.
    #[must_use]
    pub const fn updated(&self) -> &BTreeMap<String, Field> {
        &self.updated
    }

    /// Fields the skip policy classified as not provided.
    #[must_use]
    pub const fn skipped(&self) -> &BTreeMap<String, Field> {
        &self.skipped
    }

    /// Provided fields with no matching target field.
    #[must_use]
    pub const fn not_found(&self) -> &BTreeMap<String, Field> {
        &self.not_found
    }

    /// Provided fields whose target field exists but cannot hold them.
    #[must_use]
    pub const fn not_assignable(&self) -> &BTreeMap<String, Field> {
        &self.not_assignable
    }

    /// Number of classified patch fields across all four collections.
    #[must_use]
    pub fn total(&self) -> usize {
        self.updated.len() + self.skipped.len() + self.not_found.len() + self.not_assignable.len()
    }

    /// True when every provided field resolved and was copied.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.not_found.is_empty() && self.not_assignable.is_empty()
    }

    /// Aggregate pass outcome: the counts of unresolved fields, or success.
    pub fn status(&self) -> Result<(), UpdateError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(UpdateError::FieldsFailed {
                not_found: self.not_found.len(),
                not_assignable: self.not_assignable.len(),
                total: self.total(),
            })
        }
    }

    pub(crate) fn record_updated(&mut self, field: Field) {
        self.updated.insert(field.descriptor.name.clone(), field);
    }

    pub(crate) fn record_skipped(&mut self, field: Field) {
        self.skipped.insert(field.descriptor.name.clone(), field);
    }

    pub(crate) fn record_not_found(&mut self, field: Field) {
        self.not_found.insert(field.descriptor.name.clone(), field);
    }

    pub(crate) fn record_not_assignable(&mut self, field: Field) {
        self.not_assignable.insert(field.descriptor.name.clone(), field);
    }
}
