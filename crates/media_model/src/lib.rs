//! Media value model.
//!
//! This crate provides:
//! - The closed media hierarchy: [`Movie`], [`Song`], and [`MediaItem`],
//!   the two-variant union they form
//! - Cast operations in three forms with visibly different failure
//!   semantics (see below)
//! - [`Library`], an ordered sequence of media items fixed at construction
//! - [`AnyValue`], a closed tagged union over six heterogeneous shapes
//!
//! # Cast forms
//!
//! Recovering a concrete variant from a [`MediaItem`] comes in three
//! flavors:
//!
//! - `as_movie()` / `as_song()` borrow and return `Option` — a miss is an
//!   expected outcome, handled by falling through to the next test.
//! - `try_into_movie()` / `try_into_song()` consume the item and return
//!   `Result`, reporting the mismatching kinds via [`CastError`].
//! - `force_movie()` / `force_song()` consume the item and panic on a tag
//!   mismatch. Only for call sites where the variant is already proven.

mod cast;
mod item;
mod library;
mod value;

pub use cast::CastError;
pub use item::{MediaItem, MediaKind, Movie, Song};
pub use library::Library;
pub use value::{float_repr, AnyValue, TransformFn};
