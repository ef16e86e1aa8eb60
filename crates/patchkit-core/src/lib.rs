//! Core runtime for patchkit: the value model, field tables, and the
//! partial-update engine, with the ergonomics exported via the `prelude`.

// keeps the derive macro's `::patchkit::` paths valid inside this crate
extern crate self as patchkit;

// public exports are one module level down
pub mod model;
pub mod traits;
pub mod types;
pub mod update;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Strategy implementations and helpers stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        model::{FieldDescriptor, FieldKind, FieldModel},
        traits::{FieldValue, Record},
        update::{UpdateError, UpdateReport, Updater},
        value::Value,
    };
}
