use crate::{
    traits::Record,
    update::{UpdateError, UpdateReport, Updater},
};

/// Apply one typed patch to a target in a single pass and return the
/// classification report.
///
/// Assigned fields stay written even when the pass fails; construct an
/// [`Updater`] directly to inspect the full report after a failed pass or
/// to swap strategies.
pub fn apply<T, P>(target: &mut T, patch: &P) -> Result<UpdateReport, UpdateError>
where
    T: Record,
    P: Record,
{
    let mut updater = Updater::new(target);
    updater.update(patch)?;

    Ok(updater.report().clone())
}
