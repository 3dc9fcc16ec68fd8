//! Command-line driver for the medialib demonstrations.
//!
//! The command handlers live in [`commands`] and write through a
//! caller-supplied sink, so the binary and the integration tests share
//! the same code paths.

pub mod commands;
