mod assign;
mod error;
mod lookup;
mod report;
mod skip;


pub use error::{FieldError, UpdateError};
pub use lookup::{Aliases, CaseInsensitive, CaseSensitive, FieldLookup};
pub use report::{Field, UpdateReport};
pub use skip::{SkipAbsent, SkipNever, SkipPolicy};

use crate::{
    model::{FieldDescriptor, FieldModel},
    traits::Record,
    value::Value,
};
use assign::Assignment;
use std::collections::BTreeMap;

///
/// Updater
///
/// Runs merge passes against one mutably borrowed target record. Each pass
/// walks the patch's fields in declaration order, consults the skip policy
/// and the lookup strategy, resolves assignability, and files every patch
/// field into exactly one classification collection.
///
/// Passes are not transactional: fields that resolve are written even when
/// the pass ultimately reports failure. Snapshot the target beforehand for
/// all-or-nothing semantics.
///
/// The updater is single-threaded state; reuse it for sequential passes,
/// not across threads.
///

pub struct Updater<'a, T>
where
    T: Record,
{
    target: &'a mut T,
    skip: Box<dyn SkipPolicy>,
    lookup: Box<dyn FieldLookup>,
    report: UpdateReport,
}

impl<'a, T> Updater<'a, T>
where
    T: Record,
{
    /// Bind an updater to a target with the default strategies
    /// (`SkipAbsent`, `CaseInsensitive`) and an empty report.
    #[must_use]
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target,
            skip: Box::new(SkipAbsent),
            lookup: Box::new(CaseInsensitive),
            report: UpdateReport::default(),
        }
    }

    /// Replace the skip policy for subsequent passes.
    pub fn set_skip_policy(&mut self, policy: impl SkipPolicy + 'static) {
        self.skip = Box::new(policy);
    }

    /// Replace the lookup strategy for subsequent passes.
    pub fn set_lookup(&mut self, lookup: impl FieldLookup + 'static) {
        self.lookup = Box::new(lookup);
    }

    /// One typed merge pass: walk `P::FIELDS` in declaration order and copy
    /// every provided, matching, compatible field into the target.
    ///
    /// Returns `Err(UpdateError::FieldsFailed)` when any field was provided
    /// but unmatched or incompatible; the classification collections carry
    /// the detail either way.
    pub fn update<P>(&mut self, patch: &P) -> Result<(), UpdateError>
    where
        P: Record,
    {
        let mut report = UpdateReport::default();

        for model in P::FIELDS {
            let value = patch.get_value(model.name).unwrap_or(Value::Null);
            let descriptor = model.descriptor();
            self.classify(&mut report, descriptor, value, Some(model));
        }

        self.report = report;
        self.report.status()
    }

    /// One dynamic merge pass over a record-shaped value: a text-keyed
    /// `Value::Map` in entry order. Fails fast, before touching the target,
    /// when the patch is null or not record-shaped. Duplicate spellings
    /// collapse to the last occurrence at the first-seen position.
    pub fn update_value(&mut self, patch: &Value) -> Result<(), UpdateError> {
        let entries = match patch {
            Value::Null => return Err(UpdateError::NullPatch),
            Value::Map(entries) => entries,
            other => {
                return Err(UpdateError::NotARecord {
                    actual: other.tag().label(),
                });
            }
        };

        let mut fields: Vec<(&str, &Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let Value::Text(name) = key else {
                return Err(UpdateError::NotARecord {
                    actual: "map with non-text keys",
                });
            };

            match fields.iter_mut().find(|(existing, _)| *existing == name.as_str()) {
                Some(slot) => slot.1 = value,
                None => fields.push((name.as_str(), value)),
            }
        }

        let mut report = UpdateReport::default();
        for (name, value) in fields {
            // Dynamic fields carry only the shape they arrived with and
            // count as optional-wrapped, so null means "not provided"
            // under the default skip policy.
            let descriptor = FieldDescriptor {
                name: name.to_string(),
                tag: value.tag(),
                optional: true,
            };
            self.classify(&mut report, descriptor, value.clone(), None);
        }

        self.report = report;
        self.report.status()
    }

    /// The full classification partition from the last pass.
    #[must_use]
    pub const fn report(&self) -> &UpdateReport {
        &self.report
    }

    /// Fields copied into the target during the last pass.
    #[must_use]
    pub const fn updated_fields(&self) -> &BTreeMap<String, Field> {
        self.report.updated()
    }

    /// Fields the skip policy classified as not provided.
    #[must_use]
    pub const fn skipped_fields(&self) -> &BTreeMap<String, Field> {
        self.report.skipped()
    }

    /// Provided fields with no matching target field.
    #[must_use]
    pub const fn not_found_fields(&self) -> &BTreeMap<String, Field> {
        self.report.not_found()
    }

    /// Provided fields whose target field exists but cannot hold them.
    #[must_use]
    pub const fn not_assignable_fields(&self) -> &BTreeMap<String, Field> {
        self.report.not_assignable()
    }

    fn classify(
        &mut self,
        report: &mut UpdateReport,
        descriptor: FieldDescriptor,
        value: Value,
        patch_model: Option<&'static FieldModel>,
    ) {
        if self.skip.should_skip(&descriptor, &value) {
            report.record_skipped(Field { descriptor, value });
            return;
        }

        let Some(target_model) = self.lookup.find(T::FIELDS, &descriptor.name) else {
            report.record_not_found(Field { descriptor, value });
            return;
        };

        let assignment = match patch_model {
            Some(model) => assign::resolve(self.target, model, target_model, &value),
            None => assign::resolve_dynamic(self.target, target_model, &value),
        };

        match assignment {
            Assignment::Assigned => report.record_updated(Field { descriptor, value }),
            Assignment::NotAssignable => {
                report.record_not_assignable(Field { descriptor, value });
            }
        }
    }
}
