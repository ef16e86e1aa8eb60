use crate::model::FieldModel;
use std::collections::BTreeMap;

///
/// FieldLookup
///
/// Resolves a patch field name to an entry of the target's field table.
/// Each updater holds its own strategy; plain closures over
/// `(&'static [FieldModel], &str)` qualify.
///

pub trait FieldLookup {
    fn find(&self, fields: &'static [FieldModel], name: &str) -> Option<&'static FieldModel>;
}

impl<F> FieldLookup for F
where
    F: Fn(&'static [FieldModel], &str) -> Option<&'static FieldModel>,
{
    fn find(&self, fields: &'static [FieldModel], name: &str) -> Option<&'static FieldModel> {
        self(fields, name)
    }
}

///
/// CaseInsensitive
///
/// Default lookup: ASCII case-insensitive exact match. When two target
/// fields collide under case folding, the first-declared field wins.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CaseInsensitive;

impl FieldLookup for CaseInsensitive {
    fn find(&self, fields: &'static [FieldModel], name: &str) -> Option<&'static FieldModel> {
        fields.iter().find(|model| model.name.eq_ignore_ascii_case(name))
    }
}

///
/// CaseSensitive
///
/// Byte-exact name matching.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CaseSensitive;

impl FieldLookup for CaseSensitive {
    fn find(&self, fields: &'static [FieldModel], name: &str) -> Option<&'static FieldModel> {
        fields.iter().find(|model| model.name == name)
    }
}

///
/// Aliases
///
/// Renamed-field matching: rewrites known patch spellings to target names,
/// then delegates everything to the wrapped lookup.
///

#[derive(Clone, Debug, Default)]
pub struct Aliases<L = CaseInsensitive> {
    aliases: BTreeMap<String, String>,
    inner: L,
}

impl Aliases {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L> Aliases<L> {
    #[must_use]
    pub fn with_lookup(inner: L) -> Self {
        Self {
            aliases: BTreeMap::new(),
            inner,
        }
    }

    /// Map a patch spelling to a target field name.
    #[must_use]
    pub fn alias(mut self, patch: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(patch.into(), target.into());
        self
    }
}

impl<L> FieldLookup for Aliases<L>
where
    L: FieldLookup,
{
    fn find(&self, fields: &'static [FieldModel], name: &str) -> Option<&'static FieldModel> {
        match self.aliases.get(name) {
            Some(target) => self.inner.find(fields, target),
            None => self.inner.find(fields, name),
        }
    }
}
