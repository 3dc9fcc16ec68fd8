//! Cast failure reporting.

use thiserror::Error;

use crate::item::MediaKind;

/// A downcast reached an item of the wrong concrete variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cast mismatch: expected {expected}, got {got}")]
pub struct CastError {
    /// Variant the cast asked for.
    pub expected: MediaKind,
    /// Variant the item actually holds.
    pub got: MediaKind,
}

impl CastError {
    pub(crate) fn mismatch(expected: MediaKind, got: MediaKind) -> Self {
        CastError { expected, got }
    }
}
