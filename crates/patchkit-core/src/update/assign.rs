use crate::{model::FieldModel, traits::Record, value::Value};

///
/// Assignment
///
/// Outcome of one resolve-and-copy attempt.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Assignment {
    Assigned,
    NotAssignable,
}

/// Resolve a typed patch/target field pair and copy on a match.
///
/// Rule order, first match wins:
/// 1. direct — same kind, same optionality: copy as-is.
/// 2. unwrap — optional patch into a plain target of the same kind: copy
///    the carried value. An absent value can only reach this point under a
///    permissive skip policy; there is nothing to unwrap, so it classifies
///    as not assignable rather than writing or panicking.
/// 3. wrapper pair — optional into optional of the same kind: copy the
///    wrapper state, so an absent value clears the target.
///
/// Everything else is not assignable. A plain patch field is never
/// implicitly wrapped into an optional target, and kinds must be equal:
/// there is no numeric widening/narrowing and no string coercion.
pub(crate) fn resolve<T>(
    target: &mut T,
    patch_model: &FieldModel,
    target_model: &FieldModel,
    value: &Value,
) -> Assignment
where
    T: Record,
{
    if patch_model.kind != target_model.kind {
        return Assignment::NotAssignable;
    }

    match (patch_model.optional, target_model.optional) {
        (false, false) => write(target, target_model, value),
        (true, false) if value.is_null() => Assignment::NotAssignable,
        (true, false) | (true, true) => write(target, target_model, value),
        (false, true) => Assignment::NotAssignable,
    }
}

/// Resolve a dynamic patch field against the target model. The value
/// carries only a runtime shape, so resolution attempts the strict
/// conversion directly and classifies on the result.
pub(crate) fn resolve_dynamic<T>(
    target: &mut T,
    target_model: &FieldModel,
    value: &Value,
) -> Assignment
where
    T: Record,
{
    write(target, target_model, value)
}

/// The conversion happens wholesale before the write, so a failed set
/// leaves the target field untouched.
fn write<T>(target: &mut T, target_model: &FieldModel, value: &Value) -> Assignment
where
    T: Record,
{
    match target.set_value(target_model.name, value.clone()) {
        Ok(()) => Assignment::Assigned,
        Err(_) => Assignment::NotAssignable,
    }
}
