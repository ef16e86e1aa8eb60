use crate::{model::FieldDescriptor, value::Value};

///
/// SkipPolicy
///
/// Decides whether a patch field counts as "not provided". Skipped fields
/// are recorded but never looked up or written. Each updater holds its own
/// policy; plain closures over `(&FieldDescriptor, &Value)` qualify.
///

pub trait SkipPolicy {
    fn should_skip(&self, descriptor: &FieldDescriptor, value: &Value) -> bool;
}

impl<F> SkipPolicy for F
where
    F: Fn(&FieldDescriptor, &Value) -> bool,
{
    fn should_skip(&self, descriptor: &FieldDescriptor, value: &Value) -> bool {
        self(descriptor, value)
    }
}

///
/// SkipAbsent
///
/// Default policy: only an absent optional wrapper counts as "not
/// provided". A present zero or empty value is an intentional update and
/// a non-optional field is never skipped.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SkipAbsent;

impl SkipPolicy for SkipAbsent {
    fn should_skip(&self, descriptor: &FieldDescriptor, value: &Value) -> bool {
        descriptor.optional && value.is_null()
    }
}

///
/// SkipNever
///
/// Treats every patch field as provided. Under this policy a null against
/// an optional target field becomes an explicit clear instead of a skip.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SkipNever;

impl SkipPolicy for SkipNever {
    fn should_skip(&self, _descriptor: &FieldDescriptor, _value: &Value) -> bool {
        false
    }
}
