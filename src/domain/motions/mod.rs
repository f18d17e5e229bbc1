//! Procedural motions: the motion sum type, raw form input, validation, and
//! priority ordering.

mod input;
mod motion;
mod sort;
mod validate;

pub use input::MotionInput;
pub use motion::{Field, Motion, MotionKind, BASE_FIELDS};
pub use sort::{
    compare_motions, default_sort_order, kind_supports_property, sort_motions,
    validate_sort_order, SortEntry, SortError, SortKind, SortOrder, SortOrderKey, SortProperty,
};
pub use validate::{validate_motion, MotionError};
