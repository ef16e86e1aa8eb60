//! PATCH-style partial updates over typed records.
//!
//! ## Crate layout
//! - `model`: field kinds, field tables, and runtime descriptors.
//! - `traits`: the `Record` capability and `FieldValue` conversions.
//! - `types`: value newtypes with their own field shapes.
//! - `update`: the updater, strategies, classification report, and errors.
//! - `value`: the runtime value model fields travel through.
//!
//! The `prelude` mirrors the surface used by application code; deriving
//! `Record` on a target and a patch struct is enough to merge them with
//! per-field outcome tracking.

pub use patchkit_core as core;

// export so the derive's `::patchkit::` paths resolve for downstream users
pub use patchkit_core::{model, traits, types, update, value};

pub use patchkit_derive::Record;

mod apply;

pub use apply::apply;
pub use patchkit_core::{
    update::{UpdateError, UpdateReport, Updater},
    value::Value,
};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ where only the trait methods are needed avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        apply,
        model::{FieldDescriptor, FieldKind, FieldModel},
        traits::{FieldValue, Record},
        types::Bytes,
        update::{
            Aliases, CaseInsensitive, CaseSensitive, Field, FieldError, FieldLookup, SkipAbsent,
            SkipNever, SkipPolicy, UpdateError, UpdateReport, Updater,
        },
        value::{Value, ValueTag},
    };
    pub use patchkit_derive::Record;
    pub use serde::{Deserialize, Serialize};
}
