//! Classification and dispatch over the media value model.
//!
//! This crate provides the three demonstrations:
//! - census: count library items by dynamic variant
//! - report: recover concrete variants via fallible casts and print their
//!   variant-specific fields
//! - rules: ordered first-match-wins dispatch over heterogeneous values
//!
//! All output flows through [`OutputSink`], so the CLI writes to stdout
//! while tests capture and assert on the same lines.

mod census;
mod demo;
mod report;
mod rules;
mod sink;

pub use census::{take_census, MediaCensus};
pub use demo::{demo_library, demo_values};
pub use report::cast_report;
pub use rules::{DispatchRule, Dispatcher, UNIDENTIFIED};
pub use sink::{buffer_sink, stdout_sink, OutputSink, SharedSink};
